use std::sync::Arc;
use uuid::Uuid;

use crate::core::ports::DogStore;
use crate::error::{AppError, AppResult, ErrorKind};
use crate::models::{Action, Dog, Pagination, Reaction};

/// Records directed reactions and derives mutual matches from them
///
/// A match between dogs A and B exists iff both `like A -> B` and
/// `like B -> A` are stored. Matches are computed on every query.
#[derive(Clone)]
pub struct MatchEngine {
    store: Arc<dyn DogStore>,
}

impl MatchEngine {
    pub fn new(store: Arc<dyn DogStore>) -> Self {
        Self { store }
    }

    /// Record `reaction` on behalf of `acting_user`
    ///
    /// The acting user must own the liker dog. Nothing is written unless
    /// every check passes; a repeated (liker, liked) pair overwrites the
    /// previous action.
    pub async fn add_reaction(&self, acting_user: Uuid, reaction: Reaction) -> AppResult<()> {
        if reaction.is_self_reaction() {
            return Err(AppError::invalid_argument("the dog can't react to itself"));
        }

        let liker = self
            .store
            .load(reaction.liker)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "getting liker dog error"))?;

        // Classified as InvalidArgument rather than PermissionDenied.
        if !liker.is_owned_by(acting_user) {
            tracing::warn!(
                "User {} tried to react as dog {} owned by {}",
                acting_user,
                liker.id,
                liker.user_id
            );
            return Err(AppError::invalid_argument("you're not an owner of liker dog"));
        }

        self.store
            .upsert_reaction(&reaction)
            .await
            .map_err(|e| AppError::wrap(ErrorKind::Internal, e, "adding reaction error"))?;

        tracing::info!(
            "Recorded reaction: {} -> {} ({})",
            reaction.liker,
            reaction.liked,
            reaction.action
        );

        Ok(())
    }

    /// Dogs that mutually liked `dog_id`, most recent reciprocation first
    pub async fn compute_matches(
        &self,
        dog_id: Uuid,
        pagination: Pagination,
    ) -> AppResult<Vec<Dog>> {
        let matches = self
            .store
            .query_reciprocal(dog_id, Action::Like, pagination)
            .await?;

        tracing::debug!("Dog {} has {} matches on page {}", dog_id, matches.len(), pagination.page);

        Ok(matches)
    }
}
