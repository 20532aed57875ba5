//! League membership lookup and validity-filtered ranking.
//!
//! Membership is resolved by probing each league in store enumeration order;
//! the first league holding a member document for the caller wins. When the
//! caller belongs to several leagues the winner therefore depends on the
//! store's enumeration order, which is not specified by the store.

use std::{pin::pin, sync::Arc};

use futures::{StreamExt, TryStreamExt, stream};

use seedling_types::{
    errors::ApplicationError,
    league::{League, Member},
};

use crate::{config::RankPolicy, repository::LeagueRepository};

/// Result of walking a point-ordered member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub rank: Option<u32>,
    pub member_count: u32,
}

/// Counts valid members and finds the caller's 1-based position among them.
///
/// `members` must already be ordered by points, highest first. Invalid members
/// are skipped: they are neither counted nor ranked. Under
/// [`RankPolicy::Legacy`] the rank starts at 1, so a caller whose own row is
/// invalid (or absent from the listing) is still reported as first.
pub fn tally_members(caller_id: &str, members: &[Member], policy: RankPolicy) -> Tally {
    let mut rank = match policy {
        RankPolicy::Strict => None,
        RankPolicy::Legacy => Some(1),
    };
    let mut member_count = 0;

    for member in members.iter().filter(|m| m.is_valid()) {
        member_count += 1;
        if member.id == caller_id {
            rank = Some(member_count);
        }
    }

    Tally { rank, member_count }
}

/// Returns the first league, in the given order, with a member keyed by `user_id`.
///
/// Up to `concurrency` membership probes run at once. Results are consumed in
/// enumeration order, so completion order never changes the winner, and no
/// further probes are started once a match is seen. The first probe error
/// aborts the lookup.
pub async fn first_league_with_member(
    repo: Arc<dyn LeagueRepository + '_>,
    leagues: Vec<League>,
    user_id: &str,
    concurrency: usize,
) -> Result<Option<League>, ApplicationError> {
    let mut probes = pin!(
        stream::iter(leagues)
            .map(|league| {
                let repo = repo.clone();
                async move {
                    let is_member = repo.member_exists(&league.id, user_id).await?;
                    Ok::<_, ApplicationError>((league, is_member))
                }
            })
            .buffered(concurrency.max(1))
    );

    while let Some((league, is_member)) = probes.try_next().await? {
        if is_member {
            return Ok(Some(league));
        }
    }

    Ok(None)
}
