//! Typed I/O errors.

use aoplan_graph::error::ValidationError;

/// Typed failure while parsing the input XML.
///
/// Every variant names the offending element; all are fatal for the
/// current invocation — nothing is retried and no partial problem is
/// handed to the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The document is not well-formed XML.
    Xml { detail: String },

    /// A required element is missing.
    MissingElement { name: String },

    /// A required attribute is missing on an element.
    MissingAttribute { element: String, attribute: String },

    /// A `<node>` carried a `type` other than `OR`/`AND`.
    UnsupportedNodeType { found: String },

    /// A `<reach>` carried a `reachable` other than true/false.
    UnsupportedReachable { found: String },

    /// A `<cost>` value that is neither a number nor `inf`.
    InvalidCost { value: String },

    /// A `reachable="false"` entry without its `<interaction>` child.
    MissingInteraction { subassembly: String, agent: String },

    /// A node name re-used across OR/AND kinds.
    NameCollision { name: String },

    /// An `<edge>` endpoint that names no declared node.
    UnknownNodeName { name: String },

    /// The input file could not be read.
    Io { detail: String },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Xml { detail } => write!(f, "malformed XML: {detail}"),
            Self::MissingElement { name } => write!(f, "missing <{name}> element"),
            Self::MissingAttribute { element, attribute } => {
                write!(f, "can't read [{attribute}] attribute of <{element}>")
            }
            Self::UnsupportedNodeType { found } => {
                write!(f, "node type `{found}` is not supported")
            }
            Self::UnsupportedReachable { found } => write!(
                f,
                "only true/false is supported for [reachable], got `{found}`"
            ),
            Self::InvalidCost { value } => {
                write!(f, "cost must be a number or `inf`, got `{value}`")
            }
            Self::MissingInteraction { subassembly, agent } => write!(
                f,
                "<interaction> is missing for subassembly `{subassembly}` unreachable by agent `{agent}`"
            ),
            Self::NameCollision { name } => {
                write!(f, "node name `{name}` is used for both an OR and an AND node")
            }
            Self::UnknownNodeName { name } => {
                write!(f, "edge references undeclared node `{name}`")
            }
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error writing a rendered document to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// I/O error during write.
    Io { detail: String },
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for WriteError {}

/// Error reading a full assembly problem: parse stage or validation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    Parse(ParseError),
    Validation(ValidationError),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {e}"),
            Self::Validation(e) => write!(f, "validation error: {e}"),
        }
    }
}

impl std::error::Error for ReadError {}
