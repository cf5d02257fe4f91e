use crate::domain::card::Rank;

/// Колесо (A-2-3-4-5) в порядке убывания значений.
pub const WHEEL: [Rank; 5] = [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// Счётчик рангов: индекс массива = числовое значение ранга.
///
/// Используем индексы 2..=14, ячейки 0 и 1 всегда пустые.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankCounts([u8; 15]);

impl RankCounts {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0u8; 15];
        for r in ranks {
            counts[r.value() as usize] += 1;
        }
        RankCounts(counts)
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank.value() as usize]
    }

    /// Пары (ранг, количество), отсортированные по количеству (desc),
    /// затем по рангу (desc).
    ///
    /// Для `[K, K, K, 9, 9]` это `[(K, 3), (9, 2)]`.
    pub fn groups(&self) -> Vec<(Rank, u8)> {
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .rev()
            .map(|&r| (r, self.count(r)))
            .filter(|&(_, c)| c > 0)
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));
        groups
    }

    /// Мультимножество количеств по убыванию: `[4,1]`, `[3,2]`, `[2,2,1]` и т.д.
    pub fn pattern(&self) -> Vec<u8> {
        self.groups().iter().map(|&(_, c)| c).collect()
    }
}

/// Найти стрит среди пяти рангов, отсортированных по убыванию.
/// Возвращает старшую карту стрита, если он есть.
///
/// Особый случай: wheel (A2345) → возвращаем Rank::Five, туз считается младшим.
pub fn detect_straight(ranks: &[Rank; 5]) -> Option<Rank> {
    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }

    if ranks[0].value() - ranks[4].value() == 4 {
        return Some(ranks[0]);
    }

    if *ranks == WHEEL {
        return Some(Rank::Five);
    }

    None
}
