//! Drag Transfer Codec
//!
//! Items cross grids as JSON in the `text/plain` slot of the browser's
//! DataTransfer. Drag-start writes it, drop reads it back.

use thiserror::Error;
use web_sys::{DataTransfer, DragEvent};

use crate::models::Item;

/// DataTransfer slot carrying the payload
pub const TRANSFER_FORMAT: &str = "text/plain";

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("drag event has no data transfer")]
    NoDataTransfer,
    #[error("transfer payload is empty")]
    Empty,
    #[error("malformed transfer payload: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to encode item: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write transfer data: {0}")]
    Write(String),
}

pub type TransferResult<T> = Result<T, TransferError>;

pub fn encode_item(item: &Item) -> TransferResult<String> {
    serde_json::to_string(item).map_err(TransferError::Encode)
}

pub fn decode_item(payload: &str) -> TransferResult<Item> {
    if payload.trim().is_empty() {
        return Err(TransferError::Empty);
    }
    serde_json::from_str(payload).map_err(TransferError::Malformed)
}

/// Destination for an encoded payload
pub trait PayloadSink {
    fn put(&self, format: &str, data: &str) -> Result<(), String>;
}

impl PayloadSink for DataTransfer {
    fn put(&self, format: &str, data: &str) -> Result<(), String> {
        self.set_data(format, data)
            .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}

/// Encode `item` into the `text/plain` slot of `sink`
pub fn write_payload(sink: &impl PayloadSink, item: &Item) -> TransferResult<()> {
    let payload = encode_item(item)?;
    sink.put(TRANSFER_FORMAT, &payload).map_err(TransferError::Write)
}

/// Store `item` on the drag event so a drop elsewhere can rebuild it
pub fn write_drag_payload(ev: &DragEvent, item: &Item) -> TransferResult<()> {
    let transfer = ev.data_transfer().ok_or(TransferError::NoDataTransfer)?;
    write_payload(&transfer, item)?;
    transfer.set_effect_allowed("move");
    Ok(())
}

/// Raw payload of a drop event; an unreadable slot counts as empty
pub fn read_drop_payload(ev: &DragEvent) -> TransferResult<String> {
    let transfer = ev.data_transfer().ok_or(TransferError::NoDataTransfer)?;
    Ok(transfer.get_data(TRANSFER_FORMAT).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_encode_shape() {
        let json = encode_item(&Item::new("b3", "B Item 3")).unwrap();
        assert_eq!(json, r#"{"id":"b3","content":"B Item 3"}"#);
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let item = Item::new("a1", "A \"quoted\" Item ⇅");
        let decoded = decode_item(&encode_item(&item).unwrap()).unwrap();
        assert_eq!(decoded, item);
    }

    #[test]
    fn test_decode_empty() {
        assert!(matches!(decode_item(""), Err(TransferError::Empty)));
        assert!(matches!(decode_item("  \n"), Err(TransferError::Empty)));
    }

    #[test]
    fn test_decode_malformed() {
        assert!(matches!(decode_item("not json"), Err(TransferError::Malformed(_))));
        assert!(matches!(decode_item(r#"{"id":"a1"}"#), Err(TransferError::Malformed(_))));
        assert!(matches!(decode_item("https://example.com"), Err(TransferError::Malformed(_))));
    }

    struct RecordingSink(RefCell<Vec<(String, String)>>);

    impl PayloadSink for RecordingSink {
        fn put(&self, format: &str, data: &str) -> Result<(), String> {
            self.0.borrow_mut().push((format.to_string(), data.to_string()));
            Ok(())
        }
    }

    struct ReadOnlySink;

    impl PayloadSink for ReadOnlySink {
        fn put(&self, _format: &str, _data: &str) -> Result<(), String> {
            Err("InvalidStateError".to_string())
        }
    }

    #[test]
    fn test_write_payload_fills_text_slot() {
        let sink = RecordingSink(RefCell::new(Vec::new()));
        write_payload(&sink, &Item::new("a2", "A Item 2")).unwrap();
        let written = sink.0.into_inner();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, "text/plain");
        assert_eq!(decode_item(&written[0].1).unwrap(), Item::new("a2", "A Item 2"));
    }

    #[test]
    fn test_write_payload_reports_failed_write() {
        let err = write_payload(&ReadOnlySink, &Item::new("a2", "A Item 2")).unwrap_err();
        assert!(matches!(err, TransferError::Write(ref msg) if msg == "InvalidStateError"));
        assert_eq!(err.to_string(), "failed to write transfer data: InvalidStateError");
    }

    #[test]
    fn test_decode_ignores_extra_fields() {
        let item = decode_item(r#"{"id":"b1","content":"B Item 1","x":3}"#).unwrap();
        assert_eq!(item, Item::new("b1", "B Item 1"));
    }
}
