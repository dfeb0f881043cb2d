// Bootgen
// Copyright (C) 2025 Synerthink

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Dynamic proxy registry

use crate::types::TypeName;
use serde::Serialize;
use std::collections::BTreeSet;

/// Interface sets that need a proxy class generated ahead of time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfiguration {
    proxies: BTreeSet<BTreeSet<TypeName>>,
}

impl ProxyConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a proxy; interface order does not matter
    pub fn add<I, T>(&mut self, interfaces: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TypeName>,
    {
        let set: BTreeSet<TypeName> = interfaces.into_iter().map(Into::into).collect();
        if !set.is_empty() {
            self.proxies.insert(set);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    pub fn merge(&mut self, other: &ProxyConfiguration) {
        self.proxies.extend(other.proxies.iter().cloned());
    }

    pub fn to_proxy_descriptors(&self) -> Vec<ProxyDescriptor> {
        self.proxies.iter().map(|set| ProxyDescriptor { interfaces: set.iter().cloned().collect() }).collect()
    }
}

/// One proxy entry, interfaces sorted by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyDescriptor {
    pub interfaces: Vec<TypeName>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_insensitive() {
        let mut config = ProxyConfiguration::new();
        config.add(["b.B", "a.A"]);
        config.add(["a.A", "b.B"]);
        config.add(Vec::<TypeName>::new());

        assert_eq!(config.len(), 1);
        let json = serde_json::to_value(config.to_proxy_descriptors()).unwrap();
        assert_eq!(json, serde_json::json!([{ "interfaces": ["a.A", "b.B"] }]));
    }
}
