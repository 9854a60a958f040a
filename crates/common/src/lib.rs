//! Shared pieces used by the server crate and the binary: tracing setup and
//! small response types.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health::ok();
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_serializes_as_object() {
        let m = types::Message::new("Welcome, admin!");
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["message"], "Welcome, admin!");
    }
}
