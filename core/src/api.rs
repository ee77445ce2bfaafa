// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Context, Result};
use std::fmt::Debug;

/// SigningKey is the trait used by signer as the key material.
pub trait SigningKey: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the key is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningKey> SigningKey for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(key) = self else {
            return false;
        };

        key.is_valid()
    }
}

/// ProvideKey is the trait used by signer to load the key from the environment.
///
/// Service may require different key to sign tokens, for example, Media CDN
/// needs an algorithm next to the secret while Cloud CDN needs a key name.
pub trait ProvideKey: Debug + Send + Sync + Unpin + 'static {
    /// Key returned by this provider.
    type Key: Send + Sync + Unpin + 'static;

    /// Load signing key from current env.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer.
    fn provide_key(&self, ctx: &Context) -> Result<Option<Self::Key>>;
}

/// SignToken is the trait used by signer to build the signed output.
pub trait SignToken: Debug + Send + Sync + Unpin + 'static {
    /// Key used by this signer.
    type Key: Send + Sync + Unpin + 'static;

    /// Request describing what to sign.
    type Request;

    /// Build the signed token (or URL) for the request.
    ///
    /// ## Key
    ///
    /// The `key` parameter is the key loaded by [`ProvideKey`], it's possible
    /// that the key is `None`. Implementations must return an error in that
    /// case, unsigned output is never useful to a CDN.
    fn sign_token(
        &self,
        ctx: &Context,
        req: &Self::Request,
        key: Option<&Self::Key>,
    ) -> Result<String>;
}
