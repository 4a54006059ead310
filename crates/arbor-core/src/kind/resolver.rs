use std::collections::HashSet;

use crate::kind::error::KindError;
use crate::kind::Kind;

/// Decides whether two kind tokens denote the same service kind.
///
/// The graph builder and lookup operations never compare [`Kind`]s directly;
/// they go through a resolver so that synthetic stand-ins (test doubles,
/// interception proxies) are recognised as the kind they were generated from.
pub trait KindResolver: Send + Sync {
    /// Resolve a kind to its nearest non-synthetic ancestor.
    ///
    /// Ordinary kinds resolve to themselves. A synthetic proxy resolves to
    /// the base kind its name encodes; if that base is not a known kind the
    /// resolution fails (see [`KindError::UnresolvableProxy`]).
    fn resolve(&self, kind: &Kind) -> Result<Kind, KindError>;

    /// Whether `left` and `right` denote the same service kind.
    ///
    /// `None` stands for "no kind" (a missing declared dependency, or the
    /// itemless root) and only matches `None`. Exact equality short-circuits;
    /// otherwise both sides are resolved and compared again. If neither side
    /// made progress they are genuinely different kinds.
    fn same_kind(&self, left: Option<&Kind>, right: Option<&Kind>) -> Result<bool, KindError> {
        if left == right {
            return Ok(true);
        }

        let l = match left {
            Some(kind) => Some(self.resolve(kind)?),
            None => None,
        };
        let r = match right {
            Some(kind) => Some(self.resolve(kind)?),
            None => None,
        };

        if l.as_ref() == left && r.as_ref() == right {
            return Ok(false);
        }

        self.same_kind(l.as_ref(), r.as_ref())
    }
}

/// Default [`KindResolver`] backed by a registry of known kinds.
///
/// A synthetic proxy name can only be unwrapped to a kind the resolver has
/// been told about; anything else is a fatal configuration error. The graph
/// builder seeds the registry with every kind mentioned by the service
/// snapshot it is given.
#[derive(Debug, Default, Clone)]
pub struct ProxyKindResolver {
    known: HashSet<Kind>,
}

impl ProxyKindResolver {
    /// Create a resolver with an empty registry.
    pub fn new() -> Self {
        Self {
            known: HashSet::new(),
        }
    }

    /// Create a resolver pre-populated with the given kinds.
    pub fn with_known<I>(kinds: I) -> Self
    where
        I: IntoIterator<Item = Kind>,
    {
        Self {
            known: kinds.into_iter().collect(),
        }
    }

    /// Register a kind as known.
    pub fn register(&mut self, kind: Kind) {
        self.known.insert(kind);
    }

    /// Whether the given kind has been registered.
    pub fn knows(&self, kind: &Kind) -> bool {
        self.known.contains(kind)
    }
}

impl KindResolver for ProxyKindResolver {
    fn resolve(&self, kind: &Kind) -> Result<Kind, KindError> {
        match kind.proxy_base() {
            None => Ok(kind.clone()),
            Some(base) => {
                if self.known.contains(&base) {
                    Ok(base)
                } else {
                    Err(KindError::UnresolvableProxy {
                        proxy: kind.clone(),
                        base,
                    })
                }
            }
        }
    }
}
