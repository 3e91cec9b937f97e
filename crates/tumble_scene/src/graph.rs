//! Scene graph of visual proxies

use crate::proxy::VisualProxy;
use std::collections::BTreeMap;

/// Identifier of a proxy in a [`SceneGraph`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProxyId(pub u64);

/// Container of every visual proxy handed to the presenter
#[derive(Debug, Default)]
pub struct SceneGraph {
    proxies: BTreeMap<ProxyId, VisualProxy>,
    next_id: u64,
}

impl SceneGraph {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a proxy
    pub fn add(&mut self, proxy: VisualProxy) -> ProxyId {
        self.next_id += 1;
        let id = ProxyId(self.next_id);
        self.proxies.insert(id, proxy);
        log::trace!("Added proxy {:?}", id);
        id
    }

    /// Remove a proxy. Returns None if it was already gone.
    pub fn remove(&mut self, id: ProxyId) -> Option<VisualProxy> {
        self.proxies.remove(&id)
    }

    pub fn get(&self, id: ProxyId) -> Option<&VisualProxy> {
        self.proxies.get(&id)
    }

    pub fn get_mut(&mut self, id: ProxyId) -> Option<&mut VisualProxy> {
        self.proxies.get_mut(&id)
    }

    pub fn contains(&self, id: ProxyId) -> bool {
        self.proxies.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Iterate proxies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ProxyId, &VisualProxy)> {
        self.proxies.iter().map(|(id, proxy)| (*id, proxy))
    }
}
