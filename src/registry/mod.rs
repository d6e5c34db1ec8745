//! The node type registry.
//!
//! Every node kind is declared once in the `define_node_kinds!` table below. The
//! macro generates the `NodeKind` enum, its tag lookups, and the static
//! `NodeTypeSpec` each kind resolves to, so adding a node type is a single new
//! table row rather than a branch in the renderer, the editor, and the toolbox.

use crate::graph::{Node, NodeData};
use serde::{Deserialize, Serialize};
use std::fmt;

mod schema;

pub use schema::{FieldKind, FieldSpec, NodeTypeSpec};

const CONDITION_OPERATORS: &[&str] =
    &["equals", "not_equals", "contains", "greater_than", "less_than"];

macro_rules! define_node_kinds {
    ( $( ($variant:ident, $tag:literal, $title:literal, $body:literal, $icon:literal, [
        $( ($fname:literal, $flabel:literal, $fkind:expr, $fdefault:literal) ),* $(,)?
    ]) ),* $(,)? ) => {
        /// The closed set of node types a flow can contain.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum NodeKind {
            $( $variant, )*
        }

        impl NodeKind {
            /// Every kind, in toolbox order.
            pub const ALL: &'static [NodeKind] = &[ $( NodeKind::$variant, )* ];

            /// Resolves a serialized type tag such as `"message"`.
            pub fn from_tag(tag: &str) -> Option<NodeKind> {
                match tag {
                    $( $tag => Some(NodeKind::$variant), )*
                    _ => None,
                }
            }

            pub fn spec(self) -> &'static NodeTypeSpec {
                match self {
                    $(
                        NodeKind::$variant => {
                            const SPEC: NodeTypeSpec = NodeTypeSpec {
                                tag: $tag,
                                title: $title,
                                body: $body,
                                icon: $icon,
                                fields: &[ $( FieldSpec {
                                    name: $fname,
                                    label: $flabel,
                                    kind: $fkind,
                                    default: $fdefault,
                                }, )* ],
                            };
                            &SPEC
                        }
                    )*
                }
            }
        }
    };
}

use FieldKind::{Enum, Multiline, Number, Text};

define_node_kinds! {
    (Trigger, "trigger", "Trigger", "Flow entry point", "zap", [
        ("event", "Event", Enum(&["inbound", "outbound", "message", "webhook"]), "inbound"),
    ]),
    (Message, "message", "Message", "Send a message", "message-square", [
        ("message", "Message", Multiline, "New message"),
        ("channel", "Channel", Enum(&["voice", "sms", "whatsapp", "email"]), "voice"),
    ]),
    (Question, "question", "Question", "Ask and capture an answer", "help-circle", [
        ("question", "Question", Multiline, "New question"),
        ("options", "Options (one per line)", Multiline, "Option 1"),
        ("variable", "Save answer as", Text, ""),
    ]),
    (Condition, "condition", "Condition", "Branch on a value", "git-branch", [
        ("variable", "Variable", Text, "leadScore"),
        ("operator", "Operator", Enum(CONDITION_OPERATORS), "greater_than"),
        ("value", "Value", Text, "50"),
    ]),
    (Delay, "delay", "Delay", "Wait before continuing", "clock", [
        ("duration", "Duration", Number, "5"),
        ("unit", "Unit", Enum(&["seconds", "minutes", "hours", "days"]), "seconds"),
    ]),
    (Api, "api", "API Call", "Call an external endpoint", "server", [
        ("url", "URL", Text, "/api/example"),
        ("method", "Method", Enum(&["GET", "POST", "PUT", "PATCH", "DELETE"]), "GET"),
        ("payload", "Payload", Multiline, ""),
    ]),
    (Ai, "ai", "AI Step", "Generate a reply with a model", "cpu", [
        ("prompt", "Prompt", Multiline, ""),
        ("model", "Model", Text, "default"),
        ("temperature", "Temperature", Number, "0.7"),
    ]),
    (Call, "call", "Phone Call", "Place a voice call", "phone", [
        ("phone", "Phone number", Text, ""),
        ("voice", "Voice", Enum(&["default", "male", "female"]), "default"),
        ("max_duration", "Max duration (s)", Number, "300"),
    ]),
    (End, "end", "End Flow", "Finish the conversation", "x-circle", [
        ("reason", "Reason", Text, "End of conversation"),
    ]),
}

impl NodeKind {
    pub fn tag(self) -> &'static str {
        self.spec().tag
    }

    pub fn title(self) -> &'static str {
        self.spec().title
    }

    pub fn fields(self) -> &'static [FieldSpec] {
        self.spec().fields
    }

    /// Default `data` for a freshly dropped node of this kind.
    pub fn default_data(self) -> NodeData {
        self.fields()
            .iter()
            .map(|f| (f.name.to_string(), f.default.to_string()))
            .collect()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One-line text shown inside the node chrome: the first non-empty schema
/// value, falling back to the type's static body.
pub fn summarize(node: &Node) -> &str {
    let spec = node.kind.spec();
    spec.fields
        .iter()
        .filter_map(|f| node.data.get(f.name))
        .map(|v| v.lines().next().unwrap_or("").trim())
        .find(|v| !v.is_empty())
        .unwrap_or(spec.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Point;

    #[test]
    fn tags_round_trip_through_lookup() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.tag()), Some(*kind));
        }
        assert_eq!(NodeKind::ALL.len(), 9);
        assert_eq!(NodeKind::from_tag("webhook"), None);
    }

    #[test]
    fn message_and_api_schemas() {
        let names: Vec<_> = NodeKind::Message.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ["message", "channel"]);

        let api = NodeKind::Api.spec();
        assert_eq!(api.title, "API Call");
        assert_eq!(api.field("method").map(|f| f.kind.options().len()), Some(5));
        assert_eq!(api.field("payload").map(|f| f.kind), Some(Multiline));
    }

    #[test]
    fn enum_defaults_are_valid_options() {
        for kind in NodeKind::ALL {
            for field in kind.fields() {
                if let Enum(options) = field.kind {
                    assert!(
                        options.contains(&field.default),
                        "{}.{} default is not an option",
                        kind,
                        field.name
                    );
                }
            }
        }
    }

    #[test]
    fn summary_prefers_first_filled_field() {
        let mut node = Node::new(1.into(), NodeKind::Message, "Message", Point::new(0.0, 0.0));
        assert_eq!(summarize(&node), "Send a message");

        node.data.insert("channel".into(), "sms".into());
        assert_eq!(summarize(&node), "sms");

        node.data.insert("message".into(), "Hello\nsecond line".into());
        assert_eq!(summarize(&node), "Hello");
    }
}
