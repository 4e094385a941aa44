//! Resolution of raw definitions to integers.
//!
//! Every raw value is classified with [`Literal::classify`]. Aliases are
//! followed through the collection until a literal is reached, so a chain
//! such as `A -> B -> C` resolves to `C`'s value no matter where `C` appears
//! in the header. Results are memoized per definition, and a chain that
//! revisits a definition still being resolved is reported as a cycle.
//!
//! String constants resolve to nothing and are dropped from the output. An
//! alias that leads to a string constant is unresolvable.

use crate::definition::{Definition, Definitions, RawDefinition};
use crate::error::{ResolveError, ResolveResult};
use crate::literal::Literal;
use std::collections::HashMap;
use tracing::debug;

/// Resolve every definition, dropping string constants.
///
/// The output keeps the input order. The first definition with a given key
/// is the target of aliases naming that key.
pub fn resolve(raw: &[RawDefinition]) -> ResolveResult<Definitions> {
    let mut resolver = Resolver::new(raw);

    let mut resolved = Definitions::new();
    for (index, def) in raw.iter().enumerate() {
        if let Resolved::Int(value) = resolver.resolve_index(index)? {
            resolved.push(Definition {
                key: def.key.clone(),
                value,
                comment: def.comment.clone(),
            });
        }
    }

    debug!(
        extracted = raw.len(),
        resolved = resolved.len(),
        dropped = raw.len() - resolved.len(),
        "resolved definitions"
    );
    Ok(resolved)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    Int(i64),
    Str,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Pending,
    InProgress,
    Done(Resolved),
}

struct Resolver<'a> {
    raw: &'a [RawDefinition],
    /// First index of each key.
    index: HashMap<&'a str, usize>,
    slots: Vec<Slot>,
}

impl<'a> Resolver<'a> {
    fn new(raw: &'a [RawDefinition]) -> Self {
        let mut index = HashMap::with_capacity(raw.len());
        for (i, def) in raw.iter().enumerate() {
            index.entry(def.key.as_str()).or_insert(i);
        }

        Self {
            raw,
            index,
            slots: vec![Slot::Pending; raw.len()],
        }
    }

    fn resolve_index(&mut self, start: usize) -> ResolveResult<Resolved> {
        // Aliases visited on the way to a literal, in order.
        let mut chain: Vec<usize> = Vec::new();
        let mut current = start;

        let outcome = loop {
            match self.slots[current] {
                Slot::Done(resolved) => break resolved,
                Slot::InProgress => return Err(self.cycle_error(&chain, current)),
                Slot::Pending => {}
            }

            let def = &self.raw[current];
            let literal =
                Literal::classify(&def.value).map_err(|source| ResolveError::InvalidLiteral {
                    key: def.key.clone(),
                    value: def.value.clone(),
                    source,
                })?;

            let resolved = match literal {
                Literal::Str(_) => Resolved::Str,
                Literal::Int(value) => Resolved::Int(value),
                Literal::Char(ch) => Resolved::Int(ch as i64),
                Literal::Alias(target) => {
                    let Some(&next) = self.index.get(target) else {
                        return Err(ResolveError::unresolvable(&def.key, &def.value));
                    };
                    self.slots[current] = Slot::InProgress;
                    chain.push(current);
                    current = next;
                    continue;
                }
            };
            self.slots[current] = Slot::Done(resolved);
            break resolved;
        };

        if outcome == Resolved::Str {
            if let Some(&last) = chain.last() {
                let def = &self.raw[last];
                return Err(ResolveError::unresolvable(&def.key, &def.value));
            }
        }

        for index in chain {
            self.slots[index] = Slot::Done(outcome);
        }
        Ok(outcome)
    }

    fn cycle_error(&self, chain: &[usize], repeated: usize) -> ResolveError {
        let start = chain.iter().position(|&i| i == repeated).unwrap_or(0);
        let chain = chain[start..]
            .iter()
            .chain(std::iter::once(&repeated))
            .map(|&i| self.raw[i].key.clone())
            .collect();
        ResolveError::CyclicAlias { chain }
    }
}
