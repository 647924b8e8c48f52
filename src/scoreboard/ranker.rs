// Pure ranking rules, kept free of any persistence concern

use rust_decimal::Decimal;

use crate::profiles::UserProfile;

/// Prize points for the top three, best first
pub const PRIZES: [Decimal; 3] = [
    Decimal::from_parts(50, 0, 0, false, 0),
    Decimal::from_parts(30, 0, 0, false, 0),
    Decimal::from_parts(10, 0, 0, false, 0),
];

/// Order players by tours attended, then balance, both descending
///
/// The sort is stable, so players tied on both keys keep their
/// incoming order.
pub fn rank(mut players: Vec<UserProfile>) -> Vec<UserProfile> {
    players.sort_by(|a, b| {
        b.tours_attended
            .cmp(&a.tours_attended)
            .then(b.balance.cmp(&a.balance))
    });
    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn player(name: &str, tours: i32, balance: Decimal) -> UserProfile {
        UserProfile {
            user_id: Uuid::new_v4(),
            name: Some(name.to_string()),
            balance,
            tours_attended: tours,
            referred_by: None,
            referral_bonus_claimed: false,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            gender: None,
            age: None,
            family_size: None,
        }
    }

    fn names(players: &[UserProfile]) -> Vec<&str> {
        players
            .iter()
            .map(|p| p.name.as_deref().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_balance_breaks_tours_tie() {
        let ranked = rank(vec![
            player("A", 5, dec!(100)),
            player("B", 5, dec!(200)),
            player("C", 3, dec!(500)),
        ]);
        assert_eq!(names(&ranked), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_tours_dominate_balance() {
        let ranked = rank(vec![
            player("poor-veteran", 10, dec!(1)),
            player("rich-novice", 1, dec!(9999)),
        ]);
        assert_eq!(names(&ranked), vec!["poor-veteran", "rich-novice"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let ranked = rank(vec![
            player("first", 2, dec!(50)),
            player("second", 2, dec!(50)),
            player("third", 2, dec!(50)),
        ]);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_empty_scoreboard() {
        assert!(rank(vec![]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_rank_is_an_ordered_permutation(
            entries in proptest::collection::vec((0i32..100, 0i64..100_000), 0..30)
        ) {
            let players: Vec<UserProfile> = entries
                .iter()
                .enumerate()
                .map(|(i, (tours, cents))| {
                    player(&format!("p{i}"), *tours, Decimal::new(*cents, 2))
                })
                .collect();

            let ranked = rank(players.clone());
            prop_assert_eq!(ranked.len(), players.len());

            let mut before: Vec<Uuid> = players.iter().map(|p| p.user_id).collect();
            let mut after: Vec<Uuid> = ranked.iter().map(|p| p.user_id).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);

            for pair in ranked.windows(2) {
                let ahead = (pair[0].tours_attended, pair[0].balance);
                let behind = (pair[1].tours_attended, pair[1].balance);
                prop_assert!(ahead >= behind);
            }
        }
    }
}
