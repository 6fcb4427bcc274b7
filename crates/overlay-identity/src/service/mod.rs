//! # Identity Service
//!
//! Wires the pure identity domain to its outbound ports and implements
//! [`IdentityApi`].
//!
//! - content and random identifiers come from the [`ContentHasher`] and
//!   [`RandomSource`] ports
//! - ring operations use the configured [`AddressSpace`]
//! - handicaps read and correct per-peer records from the
//!   [`CounterpartyRegistry`], and any extra handicappers registered on the
//!   service's [`HandicapperChain`] are combined with them

mod handicapper;

pub use handicapper::ReliabilityHandicapper;

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    self, AddressSpace, ConfigError, Handicapper, HandicapperChain, Identifier, IdentityConfig,
    IdentityError, OperationKind, ReliabilitySelector, RingPoint, ID_LEN,
};
use crate::ports::{ConfigProvider, ContentHasher, CounterpartyRegistry, IdentityApi, RandomSource};

/// Identity service implementing the driving port.
///
/// # Example
///
/// ```rust,ignore
/// use overlay_identity::adapters::{InMemoryCounterpartyRegistry, OsRandomSource, Sha1ContentHasher};
/// use overlay_identity::{IdentityApi, IdentityConfig, IdentityService, OperationKind};
///
/// let registry = Arc::new(InMemoryCounterpartyRegistry::default());
/// let service = IdentityService::new(
///     local_id,
///     IdentityConfig::default(),
///     Sha1ContentHasher::new(),
///     OsRandomSource::new(),
///     registry,
/// )?;
/// let best = service.pick_best(&candidates, OperationKind::PublishContent);
/// ```
pub struct IdentityService<H, R> {
    hasher: H,
    random: R,
    space: AddressSpace,
    reliability: ReliabilityHandicapper,
    chain: HandicapperChain,
}

impl<H, R> IdentityService<H, R>
where
    H: ContentHasher,
    R: RandomSource,
{
    /// Create a new identity service.
    ///
    /// # Arguments
    ///
    /// * `local_id` - Our own identifier; it always costs nothing
    /// * `config` - Ring and handicap configuration
    /// * `hasher` - Content digest for content identifiers
    /// * `random` - Secure randomness for random identifiers
    /// * `registry` - Per-peer reliability records
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` does not validate.
    pub fn new(
        local_id: Identifier,
        config: IdentityConfig,
        hasher: H,
        random: R,
        registry: Arc<dyn CounterpartyRegistry>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let space = AddressSpace::new(&config.address_space)?;
        let selector = ReliabilitySelector::new(local_id, config.handicap, &space)?;
        let reliability = ReliabilityHandicapper::new(selector, registry);

        let mut chain = HandicapperChain::new();
        chain.add(Arc::new(reliability.clone()), None);

        debug!(
            local = %local_id.abbrev(),
            ring_bits = config.address_space.ring_bits,
            "Identity service ready"
        );
        Ok(Self {
            hasher,
            random,
            space,
            reliability,
            chain,
        })
    }

    /// Create with configuration read from `provider`.
    pub fn from_provider(
        local_id: Identifier,
        provider: &dyn ConfigProvider,
        hasher: H,
        random: R,
        registry: Arc<dyn CounterpartyRegistry>,
    ) -> Result<Self, ConfigError> {
        Self::new(local_id, provider.get_identity_config(), hasher, random, registry)
    }

    pub fn local_id(&self) -> &Identifier {
        self.reliability.selector().local_id()
    }

    pub fn address_space(&self) -> &AddressSpace {
        &self.space
    }

    /// Register an additional handicapper, for every kind or only `kinds`.
    pub fn add_handicapper(
        &mut self,
        handicapper: Arc<dyn Handicapper>,
        kinds: Option<&[OperationKind]>,
    ) {
        self.chain.add(handicapper, kinds);
    }

    /// Cheapest qualified candidate across all registered handicappers.
    pub fn pick_best(&self, candidates: &[Identifier], kind: OperationKind) -> Option<Identifier> {
        self.chain.pick_best(candidates, kind)
    }

    /// Qualified candidates, cheapest first.
    pub fn sort_by_preference(
        &self,
        candidates: &[Identifier],
        kind: OperationKind,
    ) -> Vec<Identifier> {
        self.chain.sort_by_preference(candidates, kind)
    }

    /// Candidates nearest to `target` on the ring first.
    pub fn sort_by_distance(&self, target: impl Into<RingPoint>, ids: &mut [Identifier]) {
        self.space.sort_by_distance(target, ids);
    }
}

impl<H, R> IdentityApi for IdentityService<H, R>
where
    H: ContentHasher,
    R: RandomSource,
{
    fn make_content_id(&self, content: &[u8]) -> Identifier {
        Identifier::from_bytes(self.hasher.digest(content))
    }

    fn identifies(&self, id: &Identifier, content: &[u8]) -> bool {
        self.make_content_id(content) == *id
    }

    fn make_random_id(&self) -> Identifier {
        let mut bytes = [0u8; ID_LEN];
        self.random.fill_bytes(&mut bytes);
        Identifier::from_bytes(bytes)
    }

    fn canonicalize(&self, raw: &[u8]) -> Result<Identifier, IdentityError> {
        domain::canonicalize(raw)
    }

    fn is_valid_identifier(&self, raw: &[u8]) -> bool {
        domain::is_valid_identifier(raw)
    }

    fn equal(&self, a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
        domain::equal(a, b)
    }

    fn distance(&self, a: RingPoint, b: RingPoint) -> u64 {
        self.space.distance(a, b)
    }

    fn sign(&self, a: RingPoint, b: RingPoint) -> i8 {
        self.space.sign(a, b)
    }

    fn handicap(&self, counterparty: &Identifier, kind: OperationKind) -> f64 {
        self.reliability.cost(counterparty, kind)
    }
}
