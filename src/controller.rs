//! Keeps the local dish list in step with the remote collection.
//!
//! Every write is pessimistic: the store changes only after the collection
//! service has confirmed the operation. Failures are logged and leave state
//! as it was before the call.
//!
//! Operations may overlap. Nothing is locked across a remote call, so two
//! in-flight operations on the same dish race and the last response to
//! arrive wins.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::DishApi;
use crate::models::{Dish, DishDraft, DishEdit, DishField, DishId};
use crate::store::DishStore;

/// The single edit slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    #[default]
    Idle,
    /// Holds an unsaved working copy of one dish.
    Editing(Dish),
}

impl EditState {
    pub fn working_copy(&self) -> Option<&Dish> {
        match self {
            EditState::Idle => None,
            EditState::Editing(dish) => Some(dish),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }
}

/// Everything a view needs to render the menu.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    pub dishes: DishStore,
    pub draft: DishDraft,
    pub edit: EditState,
    /// Bumped whenever the working copy is replaced or changed.
    edit_generation: u64,
}

/// What an operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The remote call succeeded and local state was updated.
    Applied,
    /// A precondition was not met; nothing was sent.
    Skipped,
    /// The remote call failed; local state was left as it was.
    Failed,
}

/// Bridges user intents to the remote collection and the local store.
pub struct SyncController<A> {
    api: Arc<A>,
    state: Arc<watch::Sender<MenuState>>,
}

impl<A> Clone for SyncController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A: DishApi> SyncController<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(MenuState::default());
        Self {
            api: Arc::new(api),
            state: Arc::new(state),
        }
    }

    /// Returns a receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<MenuState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> MenuState {
        self.state.borrow().clone()
    }

    pub fn dishes(&self) -> Vec<Dish> {
        self.state.borrow().dishes.as_slice().to_vec()
    }

    pub fn draft(&self) -> DishDraft {
        self.state.borrow().draft.clone()
    }

    pub fn edit_state(&self) -> EditState {
        self.state.borrow().edit.clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========== Remote operations ==========

    /// Replaces the local list with the remote one.
    pub async fn load(&self) -> Outcome {
        match self.api.list().await {
            Ok(dishes) => {
                tracing::debug!("Loaded {} dish(es)", dishes.len());
                self.state.send_modify(|s| s.dishes.replace_all(dishes));
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!("Error fetching dishes: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Submits the current draft.
    ///
    /// Does nothing when a draft field is missing. On success the created
    /// dish is appended and the draft is cleared, unless it was changed while
    /// the request was in flight.
    pub async fn add(&self) -> Outcome {
        let draft = self.draft();
        let new_dish = match draft.to_new_dish() {
            Some(new_dish) => new_dish,
            None => {
                tracing::debug!("Draft incomplete, not adding");
                return Outcome::Skipped;
            }
        };

        match self.api.create(&new_dish).await {
            Ok(created) => {
                tracing::debug!("Created dish {}", created.id);
                self.state.send_modify(|s| {
                    if s.dishes.contains(created.id) {
                        // Already present through a concurrent load
                        s.dishes.replace_by_id(created);
                    } else {
                        s.dishes.append(created);
                    }
                    if s.draft == draft {
                        s.draft.clear();
                    }
                });
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!("Error adding dish: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Saves the working copy.
    ///
    /// On failure the controller stays in edit mode with the working copy
    /// intact, so the commit can be retried.
    pub async fn commit_edit(&self) -> Outcome {
        let (working, generation) = {
            let state = self.state.borrow();
            match &state.edit {
                EditState::Editing(dish) => (dish.clone(), state.edit_generation),
                EditState::Idle => {
                    tracing::debug!("Nothing to commit");
                    return Outcome::Skipped;
                }
            }
        };

        match self.api.update(working.id, &working).await {
            Ok(()) => {
                let mut replaced = false;
                self.state.send_modify(|s| {
                    replaced = s.dishes.replace_by_id(working.clone());
                    // Leave an edit started or changed during the request alone
                    if s.edit.is_editing() && s.edit_generation == generation {
                        s.edit = EditState::Idle;
                    }
                });
                if !replaced {
                    tracing::debug!("Updated dish {} is no longer listed", working.id);
                }
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!("Error updating dish: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Deletes a dish. There is no confirmation step.
    pub async fn remove(&self, id: DishId) -> Outcome {
        match self.api.delete(id).await {
            Ok(()) => {
                self.state.send_modify(|s| {
                    if s.dishes.remove_by_id(id).is_none() {
                        tracing::debug!("Deleted dish {} was not listed", id);
                    }
                });
                Outcome::Applied
            }
            Err(e) => {
                tracing::error!("Error deleting dish {}: {}", id, e);
                Outcome::Failed
            }
        }
    }

    // ========== Local state ==========

    /// Puts a copy of `dish` in the edit slot, discarding any unsaved copy.
    pub fn begin_edit(&self, dish: &Dish) {
        let working = dish.clone();
        self.state.send_modify(|s| {
            s.edit = EditState::Editing(working);
            s.edit_generation += 1;
        });
    }

    /// Starts editing the listed dish with `id`. Returns false if not listed.
    pub fn begin_edit_by_id(&self, id: DishId) -> bool {
        let dish = self.state.borrow().dishes.get(id).cloned();
        match dish {
            Some(dish) => {
                self.begin_edit(&dish);
                true
            }
            None => false,
        }
    }

    /// Changes one field of the working copy. Does nothing when idle.
    pub fn edit_field(&self, edit: DishEdit) -> bool {
        self.state.send_if_modified(|s| match &mut s.edit {
            EditState::Editing(working) => {
                tracing::debug!("Editing {} of dish {}", edit.field(), working.id);
                working.apply(edit);
                s.edit_generation += 1;
                true
            }
            EditState::Idle => false,
        })
    }

    /// Leaves edit mode without saving.
    pub fn cancel_edit(&self) -> bool {
        self.state.send_if_modified(|s| {
            let was_editing = s.edit.is_editing();
            s.edit = EditState::Idle;
            was_editing
        })
    }

    pub fn set_draft(&self, draft: DishDraft) {
        self.state.send_modify(|s| s.draft = draft);
    }

    pub fn set_draft_field(&self, field: DishField, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|s| s.draft.set(field, value));
    }
}
