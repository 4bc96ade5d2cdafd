use tracing::trace;

use crate::error::Result;
use crate::options::RepairOptions;

pub trait MessageTransformer: Send + Sync {
    /// Transform one commit message.
    ///
    /// Return `Some(new_message)` to replace it, or `None` to leave it unchanged.
    fn transform(&self, message: &str) -> Option<String>;

    /// Short label used in trace output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

pub struct FnMessageTransformer<F>(pub F);

impl<F> MessageTransformer for FnMessageTransformer<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn transform(&self, message: &str) -> Option<String> {
        (self.0)(message)
    }
}

#[cfg(feature = "gitmoji")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GitmojiTransformer;

#[cfg(feature = "gitmoji")]
impl MessageTransformer for GitmojiTransformer {
    fn transform(&self, message: &str) -> Option<String> {
        let resolved = crate::gitmoji::resolve_gitmojis(message);
        (resolved != message).then_some(resolved)
    }

    fn name(&self) -> &'static str {
        "gitmoji"
    }
}

#[derive(Debug, Clone, Default)]
pub struct InlineCodeTransformer {
    options: RepairOptions,
}

impl InlineCodeTransformer {
    pub fn new(options: RepairOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &RepairOptions {
        &self.options
    }
}

impl MessageTransformer for InlineCodeTransformer {
    fn transform(&self, message: &str) -> Option<String> {
        let fixed = crate::repair::repair_with(message, &self.options);
        (fixed != message).then_some(fixed)
    }

    fn name(&self) -> &'static str {
        "inline_code"
    }
}

/// Ordered chain of transformers applied to every commit message.
pub struct MessagePipeline {
    transformers: Vec<Box<dyn MessageTransformer>>,
}

impl MessagePipeline {
    pub fn empty() -> Self {
        Self {
            transformers: Vec::new(),
        }
    }

    /// Gitmoji resolution (when enabled) followed by inline-code repair with `options`.
    pub fn with_options(options: RepairOptions) -> Result<Self> {
        let pipeline = Self::empty();
        #[cfg(feature = "gitmoji")]
        let pipeline = pipeline.with(GitmojiTransformer);
        Ok(pipeline.with(InlineCodeTransformer::new(options)?))
    }

    pub fn with(mut self, transformer: impl MessageTransformer + 'static) -> Self {
        self.push(transformer);
        self
    }

    pub fn push(&mut self, transformer: impl MessageTransformer + 'static) {
        self.transformers.push(Box::new(transformer));
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    pub fn apply(&self, message: &str) -> String {
        let mut current = message.to_string();
        for t in &self.transformers {
            if let Some(next) = t.transform(&current) {
                trace!(transformer = t.name(), "message rewritten");
                current = next;
            }
        }
        current
    }
}

impl Default for MessagePipeline {
    fn default() -> Self {
        let pipeline = Self::empty();
        #[cfg(feature = "gitmoji")]
        let pipeline = pipeline.with(GitmojiTransformer);
        pipeline.with(InlineCodeTransformer::default())
    }
}

impl std::fmt::Debug for MessagePipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.transformers.iter().map(|t| t.name()))
            .finish()
    }
}
