//! Table rendering: role partition, row building and timestamp display

use crate::{
    document::{PlaceholderTone, TableRow, UserRow},
    models::User,
};

/// Columns in both tables: id, name, email, created, updated, actions
pub const TABLE_COLUMNS: usize = 6;

pub const NO_ADMINS: &str = "No admins found.";
pub const NO_USERS: &str = "No users found.";
pub const ADMINS_LOAD_FAILED: &str = "Failed to load admins.";
pub const USERS_LOAD_FAILED: &str = "Failed to load users.";

/// Length of `YYYY-MM-DDTHH:MM:SS`
const DATE_TIME_LEN: usize = 19;

/// Users split by admin role membership, server order kept in each half
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPartition {
    pub admins: Vec<User>,
    pub others: Vec<User>,
}

impl UserPartition {
    pub fn len(&self) -> usize {
        self.admins.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition_users(users: Vec<User>) -> UserPartition {
    let (admins, others) = users.into_iter().partition(User::is_admin);
    UserPartition { admins, others }
}

/// ISO-8601 datetime shown as `YYYY-MM-DD HH:MM:SS`
///
/// The text is truncated, not parsed: fractional seconds and any offset
/// are dropped as-is.
pub fn format_date_time(value: Option<&str>) -> String {
    match value {
        None | Some("") => String::new(),
        Some(value) => value.replacen('T', " ", 1).chars().take(DATE_TIME_LEN).collect(),
    }
}

fn timestamp_cell(value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format_date_time(Some(value)),
        _ => "-".to_string(),
    }
}

pub fn user_row(user: &User) -> UserRow {
    UserRow {
        id: user.id_text(),
        name: user.name.clone(),
        email: user.email.clone(),
        created: timestamp_cell(user.created_at.as_deref()),
        updated: timestamp_cell(user.updated_at.as_deref()),
    }
}

pub fn placeholder(message: &str, tone: PlaceholderTone) -> TableRow {
    TableRow::Placeholder {
        message: message.to_string(),
        colspan: TABLE_COLUMNS,
        tone,
    }
}

/// Rows for one table body; an empty list renders a single muted placeholder
pub fn user_rows(users: &[User], empty_message: &str) -> Vec<TableRow> {
    if users.is_empty() {
        return vec![placeholder(empty_message, PlaceholderTone::Muted)];
    }
    users.iter().map(|user| TableRow::User(user_row(user))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ADMIN_ROLE, UserId};

    fn user(id: &str, roles: Option<&[&str]>) -> User {
        User {
            id: Some(UserId::new(id)),
            name: format!("user-{id}"),
            email: format!("{id}@example.com"),
            roles: roles.map(|roles| roles.iter().map(|r| r.to_string()).collect()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn format_date_time_truncates_to_seconds() {
        assert_eq!(format_date_time(None), "");
        assert_eq!(format_date_time(Some("")), "");
        assert_eq!(
            format_date_time(Some("2024-01-02T03:04:05.678Z")),
            "2024-01-02 03:04:05"
        );
        assert_eq!(
            format_date_time(Some("2024-01-02T03:04:05+02:00")),
            "2024-01-02 03:04:05"
        );
        assert_eq!(format_date_time(Some("2024-01-02")), "2024-01-02");
    }

    #[test]
    fn partition_is_total_and_order_preserving() {
        let users = vec![
            user("1", Some(&["ROLE_USER"])),
            user("2", Some(&[ADMIN_ROLE])),
            user("3", None),
            user("4", Some(&["ROLE_USER", ADMIN_ROLE])),
            user("5", Some(&[])),
        ];

        let partition = partition_users(users);

        let ids = |users: &[User]| users.iter().map(User::id_text).collect::<Vec<_>>();
        assert_eq!(ids(&partition.admins), ["2", "4"]);
        assert_eq!(ids(&partition.others), ["1", "3", "5"]);
        assert_eq!(partition.len(), 5);
    }

    #[test]
    fn empty_partition_renders_one_placeholder() {
        let rows = user_rows(&[], NO_ADMINS);
        assert_eq!(
            rows,
            vec![TableRow::Placeholder {
                message: "No admins found.".to_string(),
                colspan: 6,
                tone: PlaceholderTone::Muted,
            }]
        );
    }

    #[test]
    fn rows_show_dash_for_missing_timestamps() {
        let mut with_dates = user("9", None);
        with_dates.created_at = Some("2024-05-06T07:08:09.123456".to_string());

        let rows = user_rows(&[with_dates], NO_USERS);
        assert_eq!(
            rows,
            vec![TableRow::User(UserRow {
                id: "9".to_string(),
                name: "user-9".to_string(),
                email: "9@example.com".to_string(),
                created: "2024-05-06 07:08:09".to_string(),
                updated: "-".to_string(),
            })]
        );
    }
}
