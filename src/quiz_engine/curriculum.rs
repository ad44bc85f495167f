//! Which topics are offered in which grades, plus the metadata a topic picker
//! needs to draw its tile.

use crate::error::{EngineError, EngineResult};
use crate::quiz_engine::models::{Grade, Topic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicInfo {
    pub topic: Topic,
    pub min_grade: u8,
    pub max_grade: u8,
    pub label: &'static str,
    /// Icon name from the client's icon set.
    pub icon: &'static str,
    /// Tailwind gradient classes.
    pub color: &'static str,
}

impl TopicInfo {
    pub fn offers(&self, grade: Grade) -> bool {
        (self.min_grade..=self.max_grade).contains(&grade.value())
    }
}

const fn entry(
    topic: Topic, min_grade: u8, max_grade: u8,
    label: &'static str, icon: &'static str, color: &'static str,
) -> TopicInfo {
    TopicInfo { topic, min_grade, max_grade, label, icon, color }
}

pub fn info(topic: Topic) -> TopicInfo {
    match topic {
        Topic::Number        => entry(topic, 1, 12, "Number", "calculator", "from-emerald-400 to-teal-500"),
        Topic::Algebra       => entry(topic, 6, 12, "Algebra", "sigma", "from-rose-400 to-pink-500"),
        Topic::Geometry      => entry(topic, 1, 12, "Geometry", "shapes", "from-blue-400 to-indigo-500"),
        Topic::Mensuration   => entry(topic, 5, 12, "Mensuration", "ruler", "from-orange-400 to-red-500"),
        Topic::CoordGeometry => entry(topic, 7, 12, "Coord Geometry", "axis-3d", "from-cyan-400 to-sky-500"),
        Topic::Trigonometry  => entry(topic, 9, 12, "Trigonometry", "trending-up", "from-violet-400 to-purple-500"),
        Topic::Vectors       => entry(topic, 9, 12, "Vectors", "arrow-right", "from-fuchsia-400 to-pink-600"),
        Topic::Probability   => entry(topic, 7, 12, "Probability", "dna", "from-lime-400 to-green-600"),
        Topic::Data          => entry(topic, 2, 12, "Data", "bar-chart", "from-yellow-400 to-amber-500"),
        Topic::Fractions     => entry(topic, 3, 8, "Fractions", "pie-chart", "from-sky-400 to-blue-500"),
        Topic::Patterns      => entry(topic, 1, 6, "Patterns", "puzzle", "from-teal-400 to-emerald-600"),
        Topic::MentalMath    => entry(topic, 3, 12, "Mental Math", "zap", "from-amber-400 to-orange-500"),
    }
}

/// Every topic in curriculum order.
pub fn registry() -> impl Iterator<Item = TopicInfo> {
    Topic::ALL.into_iter().map(info)
}

pub fn eligible_topics(grade: Grade) -> Vec<Topic> {
    registry().filter(|t| t.offers(grade)).map(|t| t.topic).collect()
}

pub fn is_offered(topic: Topic, grade: Grade) -> bool {
    info(topic).offers(grade)
}

/// Caller-contract check performed before any generator runs.
pub fn ensure_offered(topic: Topic, grade: Grade) -> EngineResult<()> {
    if is_offered(topic, grade) {
        Ok(())
    } else {
        Err(EngineError::TopicNotOffered { topic, grade })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grade_has_topics() {
        for grade in Grade::all() {
            assert!(!eligible_topics(grade).is_empty(), "{grade} has no topics");
        }
    }

    #[test]
    fn first_grade_gets_the_basics_only() {
        let grade = Grade::new(1).unwrap();
        assert_eq!(eligible_topics(grade), vec![Topic::Number, Topic::Geometry, Topic::Patterns]);
    }

    #[test]
    fn ranges_are_inclusive() {
        let nine = Grade::new(9).unwrap();
        let eight = Grade::new(8).unwrap();
        assert!(is_offered(Topic::Trigonometry, nine));
        assert!(!is_offered(Topic::Trigonometry, eight));
        assert!(is_offered(Topic::Fractions, eight));
        assert!(!is_offered(Topic::Fractions, nine));
        assert!(matches!(
            ensure_offered(Topic::Vectors, eight),
            Err(EngineError::TopicNotOffered { topic: Topic::Vectors, .. })
        ));
    }

    #[test]
    fn labels_match_display_names() {
        for entry in registry() {
            assert_eq!(entry.label, entry.topic.to_string());
            assert!(entry.min_grade <= entry.max_grade);
        }
    }
}
