//! Loading of data a page shows on mount, keyed on the route parameters.
//!
//! Each request is numbered. A response is only applied while its number is
//! still the latest, so a slow answer for `/user/1` cannot replace the profile
//! of `/user/5` once the router has moved on.

use crate::error::ApiError;
use crate::forms::Failure;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::{Reducible, UseReducerHandle, hook, use_effect_with, use_mut_ref, use_reducer};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Pending,
    Loaded(T),
    Failed(Failure),
}

pub enum FetchAction<T> {
    /// A request numbered `generation` was sent.
    Start { generation: u32 },
    Settle {
        generation: u32,
        result: Result<T, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fetch<T> {
    generation: u32,
    state: FetchState<T>,
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            state: FetchState::Pending,
        }
    }
}

impl<T> Fetch<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Apply `action`, returning whether anything changed.
    pub fn apply(&mut self, action: FetchAction<T>) -> bool {
        match action {
            FetchAction::Start { generation } => {
                self.generation = generation;
                self.state = FetchState::Pending;
                true
            }
            FetchAction::Settle { generation, result } => {
                if generation != self.generation {
                    log::debug!("dropping response {generation}, latest is {}", self.generation);
                    return false;
                }
                self.state = match result {
                    Ok(value) => FetchState::Loaded(value),
                    Err(err) => FetchState::Failed(err.into()),
                };
                true
            }
        }
    }
}

impl<T: Clone> Reducible for Fetch<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Run `load` whenever `deps` change and expose the latest answer.
#[hook]
pub fn use_fetch<D, T, F, Fut>(deps: D, load: F) -> UseReducerHandle<Fetch<T>>
where
    D: PartialEq + 'static,
    T: Clone + 'static,
    F: FnOnce(&D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let fetch = use_reducer(Fetch::<T>::default);
    let counter = use_mut_ref(|| 0_u32);

    {
        let dispatcher = fetch.dispatcher();
        use_effect_with(deps, move |deps| {
            let generation = {
                let mut counter = counter.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            dispatcher.dispatch(FetchAction::Start { generation });
            let request = load(deps);
            spawn_local(async move {
                let result = request.await;
                dispatcher.dispatch(FetchAction::Settle { generation, result });
            });
            || ()
        });
    }

    fetch
}
