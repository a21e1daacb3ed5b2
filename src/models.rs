//! Typed Hunter.io payloads and request parameters.
//!
//! Every response struct keeps fields it does not model in `extra`, so the
//! service can add attributes without breaking deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page or domain where an address was seen.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Source {
    pub domain: Option<String>,
    pub uri: Option<String>,
    pub extracted_on: Option<String>,
    pub last_seen_on: Option<String>,
    pub still_on_page: Option<bool>,
}

/// Result of the `email-verifier` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailVerification {
    /// Verification status as reported by the API (`valid`, `invalid`, `accept_all`, ...).
    pub status: Option<String>,
    /// Legacy deliverability verdict.
    pub result: Option<String>,
    pub score: Option<u8>,
    pub email: Option<String>,
    pub regexp: Option<bool>,
    pub gibberish: Option<bool>,
    pub disposable: Option<bool>,
    pub webmail: Option<bool>,
    pub mx_records: Option<bool>,
    pub smtp_server: Option<bool>,
    pub smtp_check: Option<bool>,
    pub accept_all: Option<bool>,
    pub block: Option<bool>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Used and available counters for one request bucket.
///
/// Credits are consumed in fractions (a verification costs half a credit), so
/// the counters are not integral.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RequestUsage {
    #[serde(default)]
    pub used: f64,
    #[serde(default)]
    pub available: f64,
}

/// Result of the `account` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub plan_name: Option<String>,
    pub plan_level: Option<u32>,
    pub reset_date: Option<String>,
    pub team_id: Option<u64>,
    /// Usage per bucket, e.g. `searches` or `verifications`.
    #[serde(default)]
    pub requests: std::collections::BTreeMap<String, RequestUsage>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One address returned by a domain search.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainEmail {
    pub value: String,
    #[serde(rename = "type")]
    pub email_type: Option<String>,
    pub confidence: Option<u8>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub seniority: Option<String>,
    pub department: Option<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of the `domain-search` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomainSearch {
    pub domain: Option<String>,
    pub disposable: Option<bool>,
    pub webmail: Option<bool>,
    pub accept_all: Option<bool>,
    pub pattern: Option<String>,
    pub organization: Option<String>,
    #[serde(default)]
    pub emails: Vec<DomainEmail>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of the `email-finder` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FoundEmail {
    pub email: Option<String>,
    /// Confidence score, 0 to 100.
    pub score: Option<u8>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub domain: Option<String>,
    pub accept_all: Option<bool>,
    pub position: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored lead. Leads carry user-defined attributes, so they stay untyped.
pub type Lead = Map<String, Value>;

/// Result of the `leads` endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadList {
    #[serde(default)]
    pub leads: Vec<Lead>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Filter on the kind of address returned by a domain search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailType {
    Personal,
    Generic,
}

impl EmailType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Generic => "generic",
        }
    }
}

/// Filter on the seniority of people returned by a domain search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seniority {
    Junior,
    Senior,
    Executive,
}

impl Seniority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
            Self::Executive => "executive",
        }
    }
}

/// Parameters for [`Client::search_domain`](crate::Client::search_domain).
///
/// # Examples
/// ```
/// use hunter_client::{DomainSearchQuery, EmailType};
///
/// let query = DomainSearchQuery::domain("intercom.io")
///     .company("Intercom")
///     .limit(1)
///     .email_type(EmailType::Personal);
/// assert_eq!(query.domain.as_deref(), Some("intercom.io"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DomainSearchQuery {
    pub domain: Option<String>,
    pub company: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub email_type: Option<EmailType>,
    pub seniority: Option<Seniority>,
    /// Comma-delimited department names.
    pub department: Option<String>,
    /// Comma-delimited fields every result must have.
    pub required_field: Option<String>,
}

impl DomainSearchQuery {
    /// Search by domain name.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            domain: Some(domain.into()),
            ..Self::default()
        }
    }

    /// Search by company name instead of (or alongside) a domain.
    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn email_type(mut self, email_type: EmailType) -> Self {
        self.email_type = Some(email_type);
        self
    }

    pub fn seniority(mut self, seniority: Seniority) -> Self {
        self.seniority = Some(seniority);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn required_field(mut self, required_field: impl Into<String>) -> Self {
        self.required_field = Some(required_field.into());
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push(&mut params, "domain", self.domain.clone());
        push(&mut params, "company", self.company.clone());
        push(&mut params, "limit", self.limit.map(|v| v.to_string()));
        push(&mut params, "offset", self.offset.map(|v| v.to_string()));
        push(
            &mut params,
            "type",
            self.email_type.map(|v| v.as_str().to_string()),
        );
        push(
            &mut params,
            "seniority",
            self.seniority.map(|v| v.as_str().to_string()),
        );
        push(&mut params, "department", self.department.clone());
        push(&mut params, "required_field", self.required_field.clone());
        params
    }
}

/// Parameters for [`Client::email_finder`](crate::Client::email_finder).
#[derive(Debug, Clone, Default)]
pub struct EmailFinderQuery {
    pub domain: Option<String>,
    pub company: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// Upper bound on how long the service may spend, in seconds.
    pub max_duration: Option<u32>,
}

impl EmailFinderQuery {
    /// Look up a person by first and last name at a domain.
    pub fn new(
        domain: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            domain: Some(domain.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            ..Self::default()
        }
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn max_duration(mut self, seconds: u32) -> Self {
        self.max_duration = Some(seconds);
        self
    }

    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push(&mut params, "domain", self.domain.clone());
        push(&mut params, "company", self.company.clone());
        push(&mut params, "first_name", self.first_name.clone());
        push(&mut params, "last_name", self.last_name.clone());
        push(&mut params, "full_name", self.full_name.clone());
        push(
            &mut params,
            "max_duration",
            self.max_duration.map(|v| v.to_string()),
        );
        params
    }
}

/// Pagination for [`Client::get_list_of_lead`](crate::Client::get_list_of_lead).
#[derive(Debug, Clone, Copy, Default)]
pub struct LeadsQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl LeadsQuery {
    pub(crate) fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push(&mut params, "limit", self.limit.map(|v| v.to_string()));
        push(&mut params, "offset", self.offset.map(|v| v.to_string()));
        params
    }
}

fn push(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<String>) {
    if let Some(value) = value {
        params.push((key, value));
    }
}
