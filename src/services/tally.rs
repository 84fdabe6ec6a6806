//! Pure aggregation over a loaded vote sequence. No I/O here.

use crate::domain::models::{Category, Entity, EntityCount, Tally, Vote};
use std::collections::{BTreeMap, HashMap};

pub fn total(votes: &[Vote]) -> usize {
    votes.len()
}

pub fn count_by_category(votes: &[Vote], category: Category) -> usize {
    votes.iter().filter(|v| v.category == category).count()
}

/// Counts per category. Both categories are always present.
pub fn count_by_category_all(votes: &[Vote]) -> BTreeMap<Category, usize> {
    Category::ALL
        .into_iter()
        .map(|c| (c, count_by_category(votes, c)))
        .collect()
}

/// Entities by vote count, highest first. Equal counts keep the order in
/// which the entities first appear in the ledger.
pub fn rank_entities(votes: &[Vote]) -> Vec<EntityCount> {
    let mut slots: HashMap<Entity, usize> = HashMap::new();
    let mut grouped: Vec<(Entity, usize)> = Vec::new();
    for v in votes {
        let slot = *slots.entry(v.entity).or_insert_with(|| {
            grouped.push((v.entity, 0));
            grouped.len() - 1
        });
        grouped[slot].1 += 1;
    }

    // sort_by is stable: ties stay in first-appearance order
    grouped.sort_by(|a, b| b.1.cmp(&a.1));

    grouped
        .into_iter()
        .enumerate()
        .map(|(i, (entity, votes))| EntityCount {
            rank: i + 1,
            entity,
            votes,
        })
        .collect()
}

pub fn top_n(votes: &[Vote], n: usize) -> Vec<EntityCount> {
    let mut ranking = rank_entities(votes);
    ranking.truncate(n);
    ranking
}

impl Tally {
    pub fn from_votes(votes: &[Vote], top: usize) -> Self {
        let ranking = rank_entities(votes);
        let top = ranking.iter().take(top).cloned().collect();
        Self {
            total: total(votes),
            by_category: count_by_category_all(votes),
            ranking,
            top,
        }
    }
}

pub fn podium_medal(rank: usize) -> Option<&'static str> {
    match rank {
        1 => Some("🥇"),
        2 => Some("🥈"),
        3 => Some("🥉"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn vote(entity: Entity, category: Category) -> Vote {
        Vote {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 4)
                .and_then(|d| d.and_hms_opt(12, 0, 0))
                .expect("valid timestamp"),
            entity,
            category,
        }
    }

    fn pairs(ranking: &[EntityCount]) -> Vec<(Entity, usize)> {
        ranking.iter().map(|e| (e.entity, e.votes)).collect()
    }

    #[test]
    fn empty_sequence_yields_zeroes() {
        let votes: Vec<Vote> = vec![];
        assert_eq!(total(&votes), 0);
        assert_eq!(count_by_category(&votes, Category::DarkSide), 0);
        assert!(rank_entities(&votes).is_empty());
        assert!(top_n(&votes, 3).is_empty());
        let by = count_by_category_all(&votes);
        assert_eq!(by.len(), 2);
        assert!(by.values().all(|c| *c == 0));
    }

    #[test]
    fn category_map_reports_zero_for_missing_side() {
        let votes = vec![
            vote(Entity::Yoda, Category::LightSide),
            vote(Entity::HanSolo, Category::LightSide),
            vote(Entity::Chewbacca, Category::LightSide),
        ];
        let by = count_by_category_all(&votes);
        assert_eq!(by[&Category::DarkSide], 0);
        assert_eq!(by[&Category::LightSide], 3);
        assert_eq!(
            by.keys().copied().collect::<Vec<_>>(),
            vec![Category::DarkSide, Category::LightSide]
        );
    }

    #[test]
    fn ties_break_by_first_appearance() {
        let votes = vec![
            vote(Entity::Yoda, Category::LightSide),
            vote(Entity::R2d2, Category::LightSide),
            vote(Entity::Yoda, Category::LightSide),
            vote(Entity::R2d2, Category::DarkSide),
        ];
        assert_eq!(
            pairs(&rank_entities(&votes)),
            vec![(Entity::Yoda, 2), (Entity::R2d2, 2)]
        );

        let flipped = vec![
            vote(Entity::R2d2, Category::LightSide),
            vote(Entity::Yoda, Category::LightSide),
        ];
        assert_eq!(
            pairs(&rank_entities(&flipped)),
            vec![(Entity::R2d2, 1), (Entity::Yoda, 1)]
        );
    }

    #[test]
    fn higher_count_outranks_earlier_appearance() {
        let votes = vec![
            vote(Entity::C3po, Category::LightSide),
            vote(Entity::Palpatine, Category::DarkSide),
            vote(Entity::Palpatine, Category::DarkSide),
            vote(Entity::MaitreWindu, Category::LightSide),
        ];
        let ranking = rank_entities(&votes);
        assert_eq!(
            pairs(&ranking),
            vec![
                (Entity::Palpatine, 2),
                (Entity::C3po, 1),
                (Entity::MaitreWindu, 1)
            ]
        );
        assert_eq!(
            ranking.iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn top_n_never_pads() {
        let votes = vec![
            vote(Entity::Yoda, Category::LightSide),
            vote(Entity::DarkVador, Category::DarkSide),
            vote(Entity::Yoda, Category::LightSide),
        ];
        assert_eq!(top_n(&votes, 3).len(), 2);
        assert_eq!(top_n(&votes, 1)[0].entity, Entity::Yoda);
        assert!(top_n(&votes, 0).is_empty());
    }

    #[test]
    fn aggregation_is_pure() {
        let votes = vec![
            vote(Entity::AnakinSkywalker, Category::DarkSide),
            vote(Entity::ObiwanKenobi, Category::LightSide),
            vote(Entity::AnakinSkywalker, Category::LightSide),
        ];
        let snapshot = votes.clone();
        assert_eq!(rank_entities(&votes), rank_entities(&votes));
        assert_eq!(count_by_category_all(&votes), count_by_category_all(&votes));
        assert_eq!(Tally::from_votes(&votes, 3), Tally::from_votes(&votes, 3));
        assert_eq!(votes, snapshot);
    }

    #[test]
    fn end_to_end_scenario() {
        let votes = vec![
            vote(Entity::LukeSkywalker, Category::LightSide),
            vote(Entity::LukeSkywalker, Category::DarkSide),
            vote(Entity::Yoda, Category::LightSide),
        ];
        let tally = Tally::from_votes(&votes, 3);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.by_category[&Category::LightSide], 2);
        assert_eq!(tally.by_category[&Category::DarkSide], 1);
        assert_eq!(
            pairs(&tally.ranking),
            vec![(Entity::LukeSkywalker, 2), (Entity::Yoda, 1)]
        );
        assert_eq!(tally.top, tally.ranking);
    }

    #[test]
    fn medals_cover_the_podium_only() {
        assert_eq!(podium_medal(1), Some("🥇"));
        assert_eq!(podium_medal(3), Some("🥉"));
        assert_eq!(podium_medal(4), None);
    }
}
