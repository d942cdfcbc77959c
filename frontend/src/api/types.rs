use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(default)]
    pub team: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub team: String,
}

impl SignupRequest {
    pub fn credentials(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStatus {
    Pending,
    Approved,
    Rejected,
}

impl TravelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStatus::Pending => "pending",
            TravelStatus::Approved => "approved",
            TravelStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelStatus::Pending => "Pending",
            TravelStatus::Approved => "Approved",
            TravelStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TravelStatus::Pending),
            "approved" => Some(TravelStatus::Approved),
            "rejected" => Some(TravelStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequesterProfile {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// The `user_id` field is populated on admin listings and a bare id elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequesterRef {
    Profile(RequesterProfile),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRequest {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "user_id", default, skip_serializing_if = "Option::is_none")]
    pub requester: Option<RequesterRef>,
    #[serde(rename = "employeeName", default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    #[serde(rename = "employeeEmail", default, skip_serializing_if = "Option::is_none")]
    pub employee_email: Option<String>,
    pub destination: String,
    pub purpose: String,
    pub status: TravelStatus,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", alias = "updated_at", default)]
    pub updated_at: Option<String>,
    #[serde(rename = "approvedAt", alias = "approved_at", default)]
    pub approved_at: Option<String>,
    #[serde(rename = "approvedBy", alias = "approved_by", default)]
    pub approved_by: Option<String>,
    #[serde(rename = "rejectedAt", alias = "rejected_at", default)]
    pub rejected_at: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl TravelRequest {
    pub fn requester_id(&self) -> Option<&str> {
        match self.requester.as_ref()? {
            RequesterRef::Profile(profile) => profile.id.as_deref(),
            RequesterRef::Id(id) => Some(id.as_str()),
        }
    }

    pub fn requester_name(&self) -> Option<String> {
        if let Some(name) = self.employee_name.as_ref().filter(|n| !n.is_empty()) {
            return Some(name.clone());
        }
        match self.requester.as_ref()? {
            RequesterRef::Profile(profile) => {
                let name = match profile.last_name.as_deref() {
                    Some(last) if !last.is_empty() => format!("{} {}", profile.first_name, last),
                    _ => profile.first_name.clone(),
                };
                Some(name).filter(|n| !n.trim().is_empty())
            }
            RequesterRef::Id(_) => None,
        }
    }

    pub fn requester_email(&self) -> Option<String> {
        if let Some(email) = self.employee_email.as_ref().filter(|e| !e.is_empty()) {
            return Some(email.clone());
        }
        match self.requester.as_ref()? {
            RequesterRef::Profile(profile) if !profile.email.is_empty() => {
                Some(profile.email.clone())
            }
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == TravelStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTravelRequest {
    pub destination: String,
    pub purpose: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_accepts_mongo_identifier() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "a@x.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "role": "admin",
            "team": "R&D"
        }))
        .unwrap();
        assert_eq!(user.id, "u1");
        assert!(user.is_admin());
        assert_eq!(user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn travel_request_reads_nested_requester() {
        let request: TravelRequest = serde_json::from_value(json!({
            "_id": "r1",
            "user_id": { "_id": "u1", "first_name": "Ada", "email": "ada@x.com" },
            "destination": "Lisbon",
            "purpose": "Conference",
            "status": "pending",
            "createdAt": "2025-01-02T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(request.id, "r1");
        assert_eq!(request.requester_id(), Some("u1"));
        assert_eq!(request.requester_name().as_deref(), Some("Ada"));
        assert_eq!(request.requester_email().as_deref(), Some("ada@x.com"));
        assert!(request.is_pending());
    }

    #[test]
    fn travel_request_reads_flat_employee_fields() {
        let request: TravelRequest = serde_json::from_value(json!({
            "id": "r2",
            "employeeName": "Grace Hopper",
            "employeeEmail": "grace@x.com",
            "destination": "Oslo",
            "purpose": "Workshop",
            "status": "approved",
            "createdAt": "2025-01-02T10:00:00Z",
            "approvedAt": "2025-01-03T10:00:00Z",
            "approvedBy": "admin@x.com"
        }))
        .unwrap();
        assert_eq!(request.requester_name().as_deref(), Some("Grace Hopper"));
        assert_eq!(request.requester_email().as_deref(), Some("grace@x.com"));
        assert_eq!(request.approved_by.as_deref(), Some("admin@x.com"));
        assert_eq!(request.requester_id(), None);
    }

    #[test]
    fn travel_request_accepts_bare_requester_id() {
        let request: TravelRequest = serde_json::from_value(json!({
            "_id": "r3",
            "user_id": "u9",
            "destination": "Rome",
            "purpose": "Sales",
            "status": "rejected"
        }))
        .unwrap();
        assert_eq!(request.requester_id(), Some("u9"));
        assert_eq!(request.requester_name(), None);
        assert!(request.created_at.is_none());
    }

    #[test]
    fn status_parse_rejects_unknown_values() {
        assert_eq!(TravelStatus::parse("approved"), Some(TravelStatus::Approved));
        assert_eq!(TravelStatus::parse("all"), None);
        assert_eq!(TravelStatus::Rejected.label(), "Rejected");
    }
}
