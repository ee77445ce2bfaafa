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

use crate::{Context, ProvideKey, Result, SignToken, SigningKey};
use log::debug;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

/// Signer is the main struct used to sign tokens.
///
/// It loads the key through a [`ProvideKey`] once, caches it while it stays
/// valid, and hands it to a [`SignToken`] for every request.
pub struct Signer<K: SigningKey, R: 'static> {
    ctx: Context,
    loader: Arc<dyn ProvideKey<Key = K>>,
    builder: Arc<dyn SignToken<Key = K, Request = R>>,
    key: Arc<Mutex<Option<K>>>,
}

impl<K: SigningKey, R: 'static> Clone for Signer<K, R> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            loader: self.loader.clone(),
            builder: self.builder.clone(),
            key: self.key.clone(),
        }
    }
}

impl<K: SigningKey, R: 'static> Debug for Signer<K, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("ctx", &self.ctx)
            .field("loader", &self.loader)
            .field("builder", &self.builder)
            .finish_non_exhaustive()
    }
}

impl<K: SigningKey, R: 'static> Signer<K, R> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideKey<Key = K>,
        builder: impl SignToken<Key = K, Request = R>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            key: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign the request, returning the signed output.
    pub fn sign(&self, req: &R) -> Result<String> {
        let key = self.key.lock().unwrap_or_else(PoisonError::into_inner).clone();
        let key = if key.is_valid() {
            key
        } else {
            debug!("no valid cached key, loading from provider");
            let key = self.loader.provide_key(&self.ctx)?;
            *self.key.lock().unwrap_or_else(PoisonError::into_inner) = key.clone();
            key
        };

        self.builder.sign_token(&self.ctx, req, key.as_ref())
    }
}
