//! Sales script assembler

use copyforge_archetype::{Archetype, ArchetypeMeta};
use copyforge_model::{ArtifactKind, ScriptChannel};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::assembler::{Assembler, Assembly};
use crate::context::AssemblyContext;
use crate::error::EngineError;

const PARAGRAPHS: [&str; 3] = ["opening", "body", "close"];

/// One rendered script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesScript {
    /// Source archetype
    pub archetype_id: String,
    /// Script type name ("Cold Call Opener")
    pub name: String,
    /// Delivery channel
    pub channel: ScriptChannel,
    /// Paragraphs joined by blank lines
    pub text: String,
}

/// Scripts keyed by name, split by channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesScriptSet {
    /// Live-call scripts
    pub live_call: IndexMap<String, String>,
    /// Asynchronous-message scripts
    pub async_message: IndexMap<String, String>,
}

impl SalesScriptSet {
    /// Partition scripts by channel, preserving order
    #[must_use]
    pub fn from_scripts(scripts: &[SalesScript]) -> Self {
        let mut set = Self::default();
        for script in scripts {
            let bucket = match script.channel {
                ScriptChannel::LiveCall => &mut set.live_call,
                ScriptChannel::AsyncMessage => &mut set.async_message,
            };
            bucket.insert(script.name.clone(), script.text.clone());
        }
        set
    }

    /// Total number of scripts
    #[must_use]
    pub fn len(&self) -> usize {
        self.live_call.len() + self.async_message.len()
    }

    /// Whether there are no scripts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds [`SalesScript`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesAssembler;

impl Assembler for SalesAssembler {
    type Record = SalesScript;

    fn kind(&self) -> ArtifactKind {
        ArtifactKind::SalesScript
    }

    fn assemble(
        &self,
        ctx: &AssemblyContext<'_>,
        archetype: &'static Archetype,
    ) -> Result<Assembly<SalesScript>, EngineError> {
        self.check_kind(archetype)?;
        let ArchetypeMeta::SalesScript { channel } = archetype.meta else {
            return Err(self.wrong_kind(archetype).into());
        };

        let slots = ctx.render(archetype);
        let text = PARAGRAPHS
            .iter()
            .filter_map(|p| slots.optional(p))
            .collect::<Vec<_>>()
            .join("\n\n");
        let record = SalesScript {
            archetype_id: archetype.id.to_string(),
            name: archetype.name.to_string(),
            channel,
            text: text.clone(),
        };
        let artifact = slots.artifact_with(
            ctx.title(archetype),
            [
                ("channel".to_string(), channel.label().to_string()),
                ("script".to_string(), text),
            ],
            slots.provenance(),
        );
        Ok(Assembly::single(record, artifact))
    }
}
