/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document transform pipeline.
 */

//! Document transform pipeline.
//!
//! - [`AstTransform`] - a whole-document rewrite such as include expansion
//! - [`TransformPipeline`] - an ordered list of transforms run one after another
//!
//! ```ignore
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(IncludeTransform::new(base_dir)));
//! pipeline.execute(&mut doc)?;
//! ```

use crate::errors::IncludeError;
use pandoc_include_types::Pandoc;

pub trait AstTransform {
    /// Name used in log output.
    fn name(&self) -> &str;

    /// Rewrite `ast`. On error the document must not be used further.
    fn transform(&self, ast: &mut Pandoc) -> Result<(), IncludeError>;
}

/// Transforms run in insertion order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl TransformPipeline {
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    pub fn push(&mut self, transform: Box<dyn AstTransform>) {
        self.transforms.push(transform);
    }

    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn AstTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every transform in order, stopping at the first error.
    pub fn execute(&self, ast: &mut Pandoc) -> Result<(), IncludeError> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(ast)?;
        }
        Ok(())
    }

    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
