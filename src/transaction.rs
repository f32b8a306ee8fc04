//! Transaction module; types live in `transaction/types.rs`

pub mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_brackets() {
        assert_eq!(transactions_to_string(&[]), "[]");
    }

    #[test]
    fn test_list_renders_comma_separated() {
        let txs = vec![Transaction::new("a"), Transaction::new("b")];
        assert_eq!(transactions_to_string(&txs), "[a,b]");
    }

    #[test]
    fn test_empty_payloads_are_kept_in_rendering() {
        let txs = vec![Transaction::new(""), Transaction::new("x"), Transaction::new("")];
        assert_eq!(transactions_to_string(&txs), "[,x,]");
    }

    #[test]
    fn test_non_utf8_payload_is_rendered_lossily() {
        let tx = Transaction::new(vec![0x66, 0xff, 0x6f]);
        assert_eq!(tx.to_string(), "f\u{fffd}o");
        assert_eq!(tx.data(), &[0x66, 0xff, 0x6f]);
        assert_eq!(tx.len(), 3);
    }

    #[test]
    fn test_conversions() {
        let from_str: Transaction = "tx1".into();
        let from_vec: Transaction = b"tx1".to_vec().into();
        assert_eq!(from_str, from_vec);
        assert!(Transaction::default().is_empty());
    }

    #[test]
    fn test_json_serialization_keeps_bytes() {
        let tx = Transaction::new("hi");
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"{"data":[104,105]}"#);
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }
}
