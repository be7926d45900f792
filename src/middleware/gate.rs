//! Ordered request gates.
//!
//! A [`Gate`] inspects (and may annotate) the head of a request and either
//! lets it through or rejects it with an [`AppError`]. A [`GateChain`] runs
//! its gates left to right and stops at the first rejection, so the wrapped
//! handler only executes when every gate passed.
//!
//! Routes attach a chain with [`enforce_gates`]:
//!
//! ```rust,ignore
//! use axum::{middleware, routing::post, Handler};
//!
//! let chain = GateChain::new().then(Authenticate::new(jwt_config));
//! let route = post(create_product.layer(middleware::from_fn_with_state(chain, enforce_gates)));
//! ```

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use vendora_core::AppError;

/// A single pass/reject check run before a handler.
pub trait Gate: Send + Sync + 'static {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Passes by returning `Ok(())`. May record data in `parts.extensions`
    /// for later gates and the handler.
    fn check(&self, parts: &mut Parts) -> Result<(), AppError>;
}

#[derive(Clone, Default)]
pub struct GateChain {
    gates: Vec<Arc<dyn Gate>>,
}

impl GateChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `gate`; it runs after every gate already in the chain.
    pub fn then<G: Gate>(mut self, gate: G) -> Self {
        self.gates.push(Arc::new(gate));
        self
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn run(&self, parts: &mut Parts) -> Result<(), AppError> {
        self.gates.iter().try_for_each(|gate| {
            gate.check(parts).inspect_err(|err| {
                tracing::debug!(
                    gate = gate.name(),
                    status = %err.status.as_u16(),
                    "Request rejected by gate"
                );
            })
        })
    }
}

impl fmt::Debug for GateChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.gates.iter().map(|gate| gate.name()))
            .finish()
    }
}

/// Middleware that runs `chain` before the inner handler.
///
/// Use with `axum::middleware::from_fn_with_state(chain, enforce_gates)`.
pub async fn enforce_gates(State(chain): State<GateChain>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Err(err) = chain.run(&mut parts) {
        return err.into_response();
    }

    next.run(Request::from_parts(parts, body)).await
}
