use serde::de::{self, Deserializer as _, MapAccess, Visitor};
use serde_json::value::RawValue;
use std::fmt;
use std::io::Read;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::application::dto::{PortDto, PortRecord};
use crate::application::ingestion::errors::IngestError;
use crate::application::ingestion::results::DecodeSummary;
use crate::domain::value_objects::PortId;

/// Result of decoding a single top-level entry
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEntry {
    Decoded(PortRecord),
    /// The body (or key) was not a valid port; the entry is dropped
    Skipped { key: String, reason: String },
}

impl DecodedEntry {
    fn from_entry(key: String, body: &RawValue) -> Self {
        let id = match PortId::new(key) {
            Ok(id) => id,
            Err(e) => {
                return Self::Skipped {
                    key: String::new(),
                    reason: e.to_string(),
                }
            }
        };

        match serde_json::from_str::<PortDto>(body.get()) {
            Ok(dto) => Self::Decoded(PortRecord::new(id, dto.into())),
            Err(e) => Self::Skipped {
                key: id.into(),
                reason: e.to_string(),
            },
        }
    }
}

/// Stream ports out of a keyed document onto `sink`.
///
/// The document must be a single object mapping port IDs to port bodies:
/// `{ "portID1": {...}, "portID2": {...}, ... }`. Only one entry is held in
/// memory at a time. Each decoded record is sent with a blocking send, so
/// this call stalls whenever the channel is full; run it on a blocking
/// thread.
///
/// Bodies that do not decode into a port are skipped and counted. A broken
/// document structure fails the whole pass with [`IngestError::Decode`].
/// `cancel` is checked before every key; once it fires the pass stops with
/// [`IngestError::Cancelled`] without reading the rest of the input.
///
/// The channel is left open: closing it is up to the owner of `sink`.
pub fn decode_ports<R: Read>(
    reader: R,
    sink: &mpsc::Sender<PortRecord>,
    cancel: &CancellationToken,
) -> Result<DecodeSummary, IngestError> {
    if cancel.is_cancelled() {
        return Err(IngestError::Cancelled);
    }

    let mut deserializer = serde_json::Deserializer::from_reader(reader);
    let mut summary = DecodeSummary::default();
    let mut halted = None;

    let visitor = PortMapVisitor {
        sink,
        cancel,
        summary: &mut summary,
        halted: &mut halted,
    };

    match deserializer.deserialize_map(visitor) {
        Ok(()) => Ok(summary),
        // Our own stop reasons travel through serde as opaque custom errors
        Err(e) => Err(halted.unwrap_or_else(|| IngestError::Decode(e.to_string()))),
    }
}

struct PortMapVisitor<'a> {
    sink: &'a mpsc::Sender<PortRecord>,
    cancel: &'a CancellationToken,
    summary: &'a mut DecodeSummary,
    halted: &'a mut Option<IngestError>,
}

fn halt<E: de::Error>(slot: &mut Option<IngestError>, reason: IngestError) -> E {
    let err = E::custom(&reason);
    *slot = Some(reason);
    err
}

impl<'de> Visitor<'de> for PortMapVisitor<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping port IDs to port records")
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let PortMapVisitor {
            sink,
            cancel,
            summary,
            halted,
        } = self;

        loop {
            if cancel.is_cancelled() {
                return Err(halt(halted, IngestError::Cancelled));
            }

            // A non-string key is a syntax error and aborts the pass
            let Some(key) = map.next_key::<String>()? else {
                break;
            };
            // Only the JSON syntax is checked here; number ranges and string
            // escapes are checked when the body is converted to a port
            let body: Box<RawValue> = map.next_value()?;

            match DecodedEntry::from_entry(key, &body) {
                DecodedEntry::Decoded(record) => {
                    if sink.blocking_send(record).is_err() {
                        let reason = if cancel.is_cancelled() {
                            IngestError::Cancelled
                        } else {
                            IngestError::ChannelClosed
                        };
                        return Err(halt(halted, reason));
                    }
                    summary.decoded += 1;
                }
                DecodedEntry::Skipped { key, reason } => {
                    debug!(port_id = %key, %reason, "Skipping undecodable port entry");
                    summary.skipped += 1;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Port;
    use std::io::Cursor;

    fn decode(data: &str, capacity: usize) -> (Result<DecodeSummary, IngestError>, Vec<PortRecord>) {
        let (tx, mut rx) = mpsc::channel(capacity);
        let result = decode_ports(Cursor::new(data.to_string()), &tx, &CancellationToken::new());
        drop(tx);

        let mut records = Vec::new();
        while let Ok(record) = rx.try_recv() {
            records.push(record);
        }
        (result, records)
    }

    #[test]
    fn test_invalid_root_object() {
        let (result, records) = decode("invalid", 16);

        assert!(matches!(result, Err(IngestError::Decode(_))));
        assert!(records.is_empty());
    }

    #[test]
    fn test_root_array_is_rejected() {
        let (result, records) = decode(r#"[{"name": "portName"}]"#, 16);

        assert!(matches!(result, Err(IngestError::Decode(_))));
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let (result, records) = decode("{}", 16);

        assert_eq!(result.unwrap(), DecodeSummary::default());
        assert!(records.is_empty());
    }

    #[test]
    fn test_port_data_sub_object() {
        let (result, records) =
            decode(r#"{ "portID": { "name": "portName", "coordinates": [1.0, 2.0] } }"#, 16);

        assert_eq!(result.unwrap().decoded, 1);
        let expected = PortRecord::new(
            PortId::new("portID").unwrap(),
            Port::new("portName", "", vec![1.0, 2.0]),
        );
        assert_eq!(records, vec![expected]);
        assert_eq!(records[0].port.city(), "");
        assert_eq!(records[0].port.province(), "");
    }

    #[test]
    fn test_malformed_sub_objects_are_skipped() {
        let data = r#"{
            "bad_type": { "name": 5 },
            "good": { "name": "Ajman", "coordinates": [55.5, 25.4], "unlocs": ["AEAJM"] },
            "not_object": "text",
            "bad_coords": { "coordinates": ["a", "b"] },
            "": { "name": "nameless key" }
        }"#;

        let (result, records) = decode(data, 16);

        let summary = result.unwrap();
        assert_eq!(summary.decoded, 1);
        assert_eq!(summary.skipped, 4);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "good");
    }

    #[test]
    fn test_out_of_range_number_skips_only_its_entry() {
        let data = r#"{
            "BAD": { "name": "x", "coordinates": [1e400, 0] },
            "GOOD": { "name": "y", "coordinates": [1.0, 2.0] }
        }"#;

        let (result, records) = decode(data, 16);

        assert_eq!(result.unwrap(), DecodeSummary { decoded: 1, skipped: 1 });
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id.as_str(), "GOOD");
    }

    #[test]
    fn test_lone_surrogate_skips_only_its_entry() {
        let data = r#"{ "BAD": { "name": "\ud800" }, "GOOD": { "name": "y" } }"#;

        let (result, records) = decode(data, 16);

        assert_eq!(result.unwrap(), DecodeSummary { decoded: 1, skipped: 1 });
        assert_eq!(records[0].id.as_str(), "GOOD");
    }

    #[test]
    fn test_syntax_error_inside_body_is_structural() {
        let (result, records) =
            decode(r#"{ "BAD": { "name": "x",, }, "GOOD": { "name": "y" } }"#, 16);

        assert!(matches!(result, Err(IngestError::Decode(_))));
        assert!(records.is_empty());
    }

    #[test]
    fn test_entries_keep_document_order() {
        let data = r#"{ "c": {"name": "3"}, "a": {"name": "1"}, "b": {"name": "2"} }"#;

        let (_, records) = decode(data, 16);

        let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_non_string_key_is_structural_error() {
        let (result, records) = decode(r#"{ 1: { "name": "portName" } }"#, 16);

        assert!(matches!(result, Err(IngestError::Decode(_))));
        assert!(records.is_empty());
    }

    #[test]
    fn test_truncated_document_keeps_emitted_records() {
        let (result, records) = decode(r#"{ "a": { "name": "x" }, "b": { "name": "#, 16);

        assert!(matches!(result, Err(IngestError::Decode(_))));
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_cancelled_before_start() {
        let (tx, mut rx) = mpsc::channel(16);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = decode_ports(Cursor::new(r#"{"a": {"name": "x"}}"#), &tx, &cancel);

        assert!(matches!(result, Err(IngestError::Cancelled)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_channel() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let result = decode_ports(
            Cursor::new(r#"{"a": {"name": "x"}}"#),
            &tx,
            &CancellationToken::new(),
        );

        assert!(matches!(result, Err(IngestError::ChannelClosed)));
    }

    fn document(entries: usize) -> String {
        let body: Vec<String> = (0..entries)
            .map(|i| format!(r#""P{i}": {{ "name": "port {i}", "coordinates": [{i}, 0] }}"#))
            .collect();
        format!("{{{}}}", body.join(","))
    }

    #[test]
    fn test_full_channel_blocks_producer() {
        let (tx, mut rx) = mpsc::channel(1);
        let data = document(5);

        let producer = std::thread::spawn(move || {
            decode_ports(Cursor::new(data), &tx, &CancellationToken::new())
        });

        std::thread::sleep(std::time::Duration::from_millis(50));
        assert!(!producer.is_finished());

        let mut received = 0;
        while rx.blocking_recv().is_some() {
            received += 1;
        }

        assert_eq!(producer.join().unwrap().unwrap().decoded, 5);
        assert_eq!(received, 5);
    }

    #[test]
    fn test_cancel_mid_stream_stops_producer() {
        let (tx, mut rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        let producer_cancel = cancel.clone();
        let data = document(100);

        let producer =
            std::thread::spawn(move || decode_ports(Cursor::new(data), &tx, &producer_cancel));

        assert!(rx.blocking_recv().is_some());
        cancel.cancel();

        let mut received = 1;
        while rx.blocking_recv().is_some() {
            received += 1;
        }

        assert!(matches!(producer.join().unwrap(), Err(IngestError::Cancelled)));
        // At most the buffered record and the one already in flight
        assert!(received <= 3, "received {received} records after cancellation");
    }
}
