/**
 * Expression Cache
 *
 * Memoizes parses per grammar mode so repeated binding texts share one AST
 */

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, trace};
use rayon::prelude::*;

use super::ast::Expr;
use super::parser::parse_expression;
use super::GrammarMode;
use crate::config::ParserConfig;
use crate::error::Result;

type Partition = RwLock<HashMap<String, Arc<Expr>>>;

/// Cached entry point of the binding expression grammar.
///
/// Property, interpolation and iterator parses are memoized forever; other
/// modes always re-parse. Safe to share between threads.
pub struct ExpressionParser {
    config: ParserConfig,
    property: Partition,
    interpolation: Partition,
    iterator: Partition,
}

impl ExpressionParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        ExpressionParser {
            config,
            property: RwLock::new(HashMap::new()),
            interpolation: RwLock::new(HashMap::new()),
            iterator: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn partition(&self, mode: GrammarMode) -> Option<&Partition> {
        if !self.config.cache {
            return None;
        }
        match mode {
            GrammarMode::IsProperty => Some(&self.property),
            GrammarMode::Interpolation => Some(&self.interpolation),
            GrammarMode::IsIterator => Some(&self.iterator),
            _ => None,
        }
    }

    /// Parse `text`, returning the cached tree when this text was parsed in
    /// the same mode before.
    pub fn parse(&self, text: &str, mode: GrammarMode) -> Result<Arc<Expr>> {
        let partition = match self.partition(mode) {
            Some(partition) => partition,
            None => return parse_expression(text, mode),
        };

        {
            let entries = partition.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(expr) = entries.get(text) {
                trace!("expression cache hit ({:?}): {}", mode, text);
                return Ok(expr.clone());
            }
        }

        let expr = parse_expression(text, mode)?;
        debug!("expression cache miss ({:?}): {}", mode, text);

        // A concurrent build of the same text may have won the race; keep the
        // stored tree so every caller sees one instance.
        let mut entries = partition.write().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(text.to_string()).or_insert(expr).clone())
    }

    /// Parse a batch in parallel through the cache. Fails with the error of
    /// the first failing entry in input order.
    pub fn parse_many(&self, items: &[(&str, GrammarMode)]) -> Result<Vec<Arc<Expr>>> {
        let results: Vec<Result<Arc<Expr>>> = items
            .par_iter()
            .map(|(text, mode)| self.parse(text, *mode))
            .collect();
        results.into_iter().collect()
    }

    /// Number of cached trees for `mode`. Zero for modes that are never cached.
    pub fn cached_len(&self, mode: GrammarMode) -> usize {
        let partition = match mode {
            GrammarMode::IsProperty => &self.property,
            GrammarMode::Interpolation => &self.interpolation,
            GrammarMode::IsIterator => &self.iterator,
            _ => return 0,
        };
        partition.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Drop every cached tree.
    pub fn clear(&self) {
        for partition in [&self.property, &self.interpolation, &self.iterator] {
            partition
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
        debug!("expression cache cleared");
    }
}

impl Default for ExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}
