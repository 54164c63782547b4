//! Riddle catalog - the ordered, immutable list of riddles
//!
//! Catalog order is the progression order; there is no shuffling.

use std::collections::HashSet;

use crate::error::{CatalogError, EngineError};

/// A single multiple-choice riddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Riddle {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`
    pub correct_answer: usize,
    /// Countdown length in seconds
    pub time_limit: u32,
    pub hint: Option<String>,
}

impl Riddle {
    pub fn new<Q, I, O>(id: u32, question: Q, options: I, correct_answer: usize, time_limit: u32) -> Self
    where
        Q: Into<String>,
        I: IntoIterator<Item = O>,
        O: Into<String>,
    {
        Self {
            id,
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer,
            time_limit,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.options.len() < 2 {
            return Err(CatalogError::TooFewOptions { id: self.id });
        }
        if self.correct_answer >= self.options.len() {
            return Err(CatalogError::AnswerOutOfRange { id: self.id });
        }
        if self.time_limit == 0 {
            return Err(CatalogError::ZeroTimeLimit { id: self.id });
        }
        Ok(())
    }
}

/// Ordered, read-only riddle list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiddleCatalog {
    riddles: Vec<Riddle>,
}

impl RiddleCatalog {
    /// Build a catalog, checking every riddle and id uniqueness.
    pub fn new(riddles: Vec<Riddle>) -> Result<Self, CatalogError> {
        if riddles.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(riddles.len());
        for riddle in &riddles {
            riddle.validate()?;
            if !seen.insert(riddle.id) {
                return Err(CatalogError::DuplicateId { id: riddle.id });
            }
        }
        Ok(Self { riddles })
    }

    /// The riddles shipped with the game.
    pub fn builtin() -> Self {
        let riddles = vec![
            Riddle::new(
                1,
                "Что можно увидеть с закрытыми глазами?",
                ["Темноту", "Сон", "Свет", "Мечту"],
                1,
                30,
            )
            .with_hint("Это приходит каждую ночь."),
            Riddle::new(
                2,
                "Летит — кричит, сядет — молчит. Кто это?",
                ["Птица", "Снег", "Пуля", "Самолет"],
                1,
                25,
            )
            .with_hint("Зимой его много."),
            Riddle::new(
                3,
                "Что становится больше, когда его ставят вверх ногами?",
                ["Стакан", "Число 6", "Зонт", "Дерево"],
                1,
                20,
            )
            .with_hint("Переверни цифру."),
            Riddle::new(
                4,
                "Чем больше из неё берёшь, тем больше она становится. Что это?",
                ["Вода", "Яма", "Знание", "Время"],
                1,
                20,
            )
            .with_hint("Её копают лопатой."),
            Riddle::new(
                5,
                "У кого есть шея, но нет головы?",
                ["Змея", "Бутылка", "Рубашка", "Гитара"],
                1,
                15,
            )
            .with_hint("Из неё пьют."),
        ];
        Self { riddles }
    }

    pub fn count(&self) -> usize {
        self.riddles.len()
    }

    pub fn riddle_at(&self, index: usize) -> Result<&Riddle, EngineError> {
        self.riddles.get(index).ok_or(EngineError::OutOfRange {
            index,
            len: self.riddles.len(),
        })
    }

    /// Riddle at `index`, clamped to the last one.
    ///
    /// Catalogs are never empty, so this always has an answer.
    pub fn current(&self, index: usize) -> &Riddle {
        let last = self.riddles.len().saturating_sub(1);
        &self.riddles[index.min(last)]
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 == self.riddles.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Riddle> {
        self.riddles.iter()
    }

    /// Shortest and longest time limit, for the menu summary.
    pub fn time_limit_range(&self) -> (u32, u32) {
        let min = self.riddles.iter().map(|r| r.time_limit).min().unwrap_or(0);
        let max = self.riddles.iter().map(|r| r.time_limit).max().unwrap_or(0);
        (min, max)
    }
}

impl Default for RiddleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_options(id: u32) -> Riddle {
        Riddle::new(id, "q", ["a", "b"], 0, 10)
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = RiddleCatalog::builtin();
        let rebuilt = RiddleCatalog::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(builtin.count(), 5);

        for riddle in builtin.iter() {
            assert!(riddle.correct_answer < riddle.options.len());
            assert!(riddle.time_limit > 0);
            assert!(riddle.hint.is_some());
        }
    }

    #[test]
    fn builtin_time_limits() {
        let limits: Vec<u32> = RiddleCatalog::builtin().iter().map(|r| r.time_limit).collect();
        assert_eq!(limits, vec![30, 25, 20, 20, 15]);
        assert_eq!(RiddleCatalog::builtin().time_limit_range(), (15, 30));
    }

    #[test]
    fn riddle_at_out_of_range() {
        let catalog = RiddleCatalog::builtin();
        assert_eq!(catalog.riddle_at(0).unwrap().id, 1);
        assert_eq!(
            catalog.riddle_at(5),
            Err(EngineError::OutOfRange { index: 5, len: 5 })
        );
    }

    #[test]
    fn is_last_only_for_final_index() {
        let catalog = RiddleCatalog::builtin();
        assert!(!catalog.is_last(0));
        assert!(!catalog.is_last(3));
        assert!(catalog.is_last(4));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(RiddleCatalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_single_option() {
        let riddle = Riddle::new(7, "q", ["only"], 0, 10);
        assert_eq!(
            RiddleCatalog::new(vec![riddle]),
            Err(CatalogError::TooFewOptions { id: 7 })
        );
    }

    #[test]
    fn rejects_answer_outside_options() {
        let riddle = Riddle::new(3, "q", ["a", "b"], 2, 10);
        assert_eq!(
            RiddleCatalog::new(vec![riddle]),
            Err(CatalogError::AnswerOutOfRange { id: 3 })
        );
    }

    #[test]
    fn rejects_zero_time_limit() {
        let riddle = Riddle::new(4, "q", ["a", "b"], 0, 0);
        assert_eq!(
            RiddleCatalog::new(vec![riddle]),
            Err(CatalogError::ZeroTimeLimit { id: 4 })
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        assert_eq!(
            RiddleCatalog::new(vec![two_options(1), two_options(1)]),
            Err(CatalogError::DuplicateId { id: 1 })
        );
    }
}
