//! # Ticket Value Object
//!
//! 認証で得られるセッションチケット

use std::fmt;

/// セッションチケット
///
/// 認証完了後に一度だけ確定し、以降は読み取り専用で全タスクに共有される。
/// 認証に失敗した場合は空のチケットになる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ticket(String);

impl Ticket {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 認証失敗時に使う空のチケット
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_empty() {
        let ticket = Ticket::empty();
        assert!(ticket.is_empty());
        assert_eq!(ticket.to_string(), "");
    }

    #[test]
    fn test_ticket_display() {
        let ticket = Ticket::new("abc123");
        assert!(!ticket.is_empty());
        assert_eq!(ticket.as_str(), "abc123");
        assert_eq!(format!("OTCSTicket: {ticket}"), "OTCSTicket: abc123");
    }
}
