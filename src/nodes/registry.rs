//! Host-facing node table: the names a node-graph runtime registers and the
//! dispatch from its integer inputs to the library routines.

use crate::{
    envelope::generator::{EnvelopeOptions, EnvelopeRequest, generate_with},
    foundation::error::{CrossfadeError, CrossfadeResult},
    mask::activation::{ActivationMask, DEFAULT_MASK_CAPACITY, at},
};

/// Category every node is registered under.
pub const NODE_CATEGORY: &str = "nilor-nodes";

/// The nodes a host registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Envelope generator.
    Floats,
    /// Image count to activation mask.
    IntToListOfBools,
    /// Single mask lookup.
    BoolFromListOfBools,
}

impl NodeKind {
    /// Every node, in registration order.
    pub const ALL: [Self; 3] = [
        Self::Floats,
        Self::IntToListOfBools,
        Self::BoolFromListOfBools,
    ];

    /// Key the host registers the node under.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Floats => "Nilor Floats",
            Self::IntToListOfBools => "Nilor Int To List Of Bools",
            Self::BoolFromListOfBools => "Nilor Bool From List Of Bools",
        }
    }

    /// Name shown to users. Hosts show the class name; no separate display
    /// table is registered.
    pub fn display_name(self) -> &'static str {
        self.class_name()
    }

    /// See [`NODE_CATEGORY`].
    pub fn category(self) -> &'static str {
        NODE_CATEGORY
    }

    /// Entry-point name the host calls.
    pub fn function_name(self) -> &'static str {
        match self {
            Self::Floats => "test",
            Self::IntToListOfBools => "boolify",
            Self::BoolFromListOfBools => "bool_by_index",
        }
    }

    /// Required inputs, in declaration order.
    pub fn input_names(self) -> &'static [&'static str] {
        match self {
            Self::Floats => &["number_of_frames", "number_of_images", "image_number"],
            Self::IntToListOfBools => &["number_of_images"],
            Self::BoolFromListOfBools => &["booleans", "index"],
        }
    }

    /// Name of the single output.
    pub fn output_name(self) -> &'static str {
        match self {
            Self::Floats => "floats",
            Self::IntToListOfBools => "booleans",
            Self::BoolFromListOfBools => "boolean",
        }
    }

    /// `true` when the host should treat the output as a list of items.
    pub fn output_is_list(self) -> bool {
        matches!(self, Self::IntToListOfBools)
    }

    /// Reverse of [`Self::class_name`].
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.class_name() == name)
    }
}

/// Integer input that a list-mode host may deliver wrapped in a list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum IndexArg {
    /// Plain integer.
    One(i64),
    /// List-wrapped value; the first element is used.
    List(Vec<i64>),
}

impl IndexArg {
    /// The effective index; an empty list is a contract violation.
    pub fn resolve(&self) -> CrossfadeResult<i64> {
        match self {
            Self::One(i) => Ok(*i),
            Self::List(v) => v
                .first()
                .copied()
                .ok_or_else(|| CrossfadeError::contract("index list must be non-empty")),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_MASK_CAPACITY
}

/// One node call with its inputs, tagged by `node` in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum NodeInvocation {
    /// Inputs of [`NodeKind::Floats`].
    Floats {
        /// Frames on the output timeline.
        number_of_frames: usize,
        /// Images in the sequence.
        number_of_images: usize,
        /// 1-based image to generate.
        image_number: usize,
        /// Placement options; defaults reproduce reference output.
        #[serde(default)]
        options: EnvelopeOptions,
    },
    /// Inputs of [`NodeKind::IntToListOfBools`].
    IntToListOfBools {
        /// Active image count.
        number_of_images: usize,
        /// Mask length.
        #[serde(default = "default_capacity")]
        max_images: usize,
    },
    /// Inputs of [`NodeKind::BoolFromListOfBools`].
    BoolFromListOfBools {
        /// Mask to read.
        booleans: Vec<bool>,
        /// Slot to read.
        index: IndexArg,
    },
}

impl NodeInvocation {
    /// Node this invocation targets.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Floats { .. } => NodeKind::Floats,
            Self::IntToListOfBools { .. } => NodeKind::IntToListOfBools,
            Self::BoolFromListOfBools { .. } => NodeKind::BoolFromListOfBools,
        }
    }
}

/// Result of a node call, keyed by the node's output name in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeOutput {
    /// Envelope weights.
    Floats(Vec<f64>),
    /// Activation mask.
    Booleans(Vec<bool>),
    /// Single mask slot.
    Boolean(bool),
}

/// Run `inv` against the library routines.
#[tracing::instrument(skip(inv), fields(node = inv.kind().class_name()))]
pub fn invoke(inv: &NodeInvocation) -> CrossfadeResult<NodeOutput> {
    match inv {
        NodeInvocation::Floats {
            number_of_frames,
            number_of_images,
            image_number,
            options,
        } => {
            let req = EnvelopeRequest::new(*number_of_frames, *number_of_images, *image_number);
            Ok(NodeOutput::Floats(generate_with(&req, *options)?.into()))
        }
        NodeInvocation::IntToListOfBools {
            number_of_images,
            max_images,
        } => Ok(NodeOutput::Booleans(
            ActivationMask::with_capacity(*number_of_images, *max_images).into(),
        )),
        NodeInvocation::BoolFromListOfBools { booleans, index } => {
            Ok(NodeOutput::Boolean(at(booleans, index.resolve()?)?))
        }
    }
}

/// Parses a JSON invocation, runs it, and returns the output as JSON.
pub fn invoke_json(payload: &str) -> CrossfadeResult<serde_json::Value> {
    let inv: NodeInvocation = serde_json::from_str(payload)?;
    let out = invoke(&inv)?;
    Ok(serde_json::to_value(out)?)
}

#[cfg(test)]
#[path = "../../tests/unit/nodes/registry.rs"]
mod tests;
