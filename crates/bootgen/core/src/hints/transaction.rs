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

//! Transaction management hints

use super::{NativeHint, TypeHint};
use crate::nativex::TypeAccess;

const PROXY_CONFIGURATION: &str = "org.springframework.transaction.annotation.ProxyTransactionManagementConfiguration";
const TRANSACTIONAL: &str = "org.springframework.transaction.annotation.Transactional";
const ASPECTJ_JTA_CONFIGURATION: &str = "org.springframework.transaction.aspectj.AspectJJtaTransactionManagementConfiguration";

/// Hints for annotation-driven transaction management
pub fn transaction_management_hints() -> Vec<NativeHint> {
    vec![
        NativeHint::triggered_by(PROXY_CONFIGURATION)
            .with_types(TypeHint::of(["org.springframework.context.annotation.AutoProxyRegistrar", PROXY_CONFIGURATION]))
            .with_types(TypeHint::of(["org.springframework.transaction.interceptor.BeanFactoryTransactionAttributeSourceAdvisor$1"])),
        NativeHint::triggered_by(TRANSACTIONAL)
            .with_types(TypeHint::of([TRANSACTIONAL, "javax.transaction.Transactional"]).with_access([TypeAccess::PublicMethods]))
            .with_types(TypeHint::of(["org.springframework.transaction.annotation.Propagation"]).with_access([TypeAccess::DeclaredMethods, TypeAccess::DeclaredFields])),
        NativeHint::triggered_by(ASPECTJ_JTA_CONFIGURATION).with_types(TypeHint::of([
            ASPECTJ_JTA_CONFIGURATION,
            "org.springframework.transaction.aspectj.AspectJTransactionManagementConfiguration",
        ])),
    ]
}
