//! Prelude module - common imports for tablecast users
//!
//! ```rust
//! use tablecast::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellKind,

    // Serialization types
    CsvWriteOptions,
    CsvWriter,

    // Delivery types
    DeliveryOutcome,
    DeliverySelector,
    DirectorySink,

    // Error types
    Error,
    ExportError,
    // Pipeline types
    ExportOptions,
    Exporter,
    FileSink,
    LineTerminator,
    RelayTransport,
    Result,
    SessionStore,
    SettingsReader,

    // Table sources
    TableSource,
    VecTable,
    Whitelist,
    WithholdReason,
};
