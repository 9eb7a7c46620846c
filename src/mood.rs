//! Mood categories and the profile table that drives scores, quotes,
//! recommendations and keyword inference.

/// The six known mood categories. Anything else entered by the user is
/// treated as a free-text category and falls back to [`FALLBACK`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Excited,
    Anxious,
    Tired,
}

/// Everything tied to one category: its numeric rating, the quote and
/// recommendation shown for it, and the keywords that infer it from
/// free text.
pub struct Profile {
    pub score: f64,
    pub quote: &'static str,
    pub recommendation: &'static str,
    pub keywords: &'static [&'static str],
}

/// Profile used for free-text categories with no known profile.
pub const FALLBACK: Profile = Profile {
    score: 5.0,
    quote: "Keep going, you're doing great!",
    recommendation: "Take care of yourself, and do something you love!",
    keywords: &[],
};

impl Mood {
    /// All categories, in inference probe order. The order is load-bearing:
    /// the first category with a matching keyword wins.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Neutral,
        Mood::Sad,
        Mood::Excited,
        Mood::Anxious,
        Mood::Tired,
    ];

    pub fn parse(category: &str) -> Option<Mood> {
        match category {
            "happy" => Some(Mood::Happy),
            "neutral" => Some(Mood::Neutral),
            "sad" => Some(Mood::Sad),
            "excited" => Some(Mood::Excited),
            "anxious" => Some(Mood::Anxious),
            "tired" => Some(Mood::Tired),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Anxious => "anxious",
            Mood::Tired => "tired",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Excited => "😁",
            Mood::Anxious => "😰",
            Mood::Tired => "😴",
        }
    }

    /// The exhaustive match keeps the table in sync with the enum: adding a
    /// category without a profile is a compile error.
    pub fn profile(self) -> &'static Profile {
        match self {
            Mood::Happy => &HAPPY,
            Mood::Neutral => &NEUTRAL,
            Mood::Sad => &SAD,
            Mood::Excited => &EXCITED,
            Mood::Anxious => &ANXIOUS,
            Mood::Tired => &TIRED,
        }
    }
}

const HAPPY: Profile = Profile {
    score: 10.0,
    quote: "Happiness is a direction, not a place.",
    recommendation: "Listen to upbeat music, go for a run, or call a friend!",
    keywords: &["happy", "joyful", "excited", "great", "awesome"],
};

const NEUTRAL: Profile = Profile {
    score: 5.0,
    quote: "Keep your face always toward the sunshine—and shadows will fall behind you.",
    recommendation: "Try some light reading, a walk in the park, or some relaxing music.",
    keywords: &["neutral", "calm", "okay", "fine", "content"],
};

const SAD: Profile = Profile {
    score: 0.0,
    quote: "Tough times never last, but tough people do.",
    recommendation: "Consider watching a funny movie, talking to a friend, or doing some yoga.",
    keywords: &["sad", "depressed", "down", "unhappy", "miserable"],
};

const EXCITED: Profile = Profile {
    score: 8.0,
    quote: "The only way to do great work is to love what you do.",
    recommendation: "Channel your energy into a new project or hobby!",
    keywords: &["excited", "enthusiastic", "eager", "thrilled", "amped"],
};

const ANXIOUS: Profile = Profile {
    score: 3.0,
    quote: "You are stronger than you think.",
    recommendation: "Practice deep breathing, meditation, or talk to a friend.",
    keywords: &["anxious", "nervous", "worried", "stressed", "tense"],
};

const TIRED: Profile = Profile {
    score: 2.0,
    quote: "Rest and self-care are so important.",
    recommendation: "Take a nap, relax with a good book, or watch your favorite show.",
    keywords: &["tired", "exhausted", "fatigued", "weary", "sleepy"],
};

/// Looks up the profile for a stored category string, falling back for
/// anything outside the known six.
pub fn profile_for(category: &str) -> &'static Profile {
    match Mood::parse(category) {
        Some(mood) => mood.profile(),
        None => &FALLBACK,
    }
}

pub fn score_for(category: &str) -> f64 {
    profile_for(category).score
}

/// Infers a mood category from free text. Matching is case-insensitive
/// substring containment; categories are probed in [`Mood::ALL`] order and
/// the first hit wins. Text with no keyword at all reads as neutral.
pub fn infer(text: &str) -> Mood {
    let lower = text.to_lowercase();
    for mood in Mood::ALL {
        if mood.profile().keywords.iter().any(|k| lower.contains(k)) {
            return mood;
        }
    }
    Mood::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_keywords_and_a_quote() {
        for mood in Mood::ALL {
            let profile = mood.profile();
            assert!(!profile.keywords.is_empty(), "{} has no keywords", mood.label());
            assert!(!profile.quote.is_empty());
            assert!(!profile.recommendation.is_empty());
        }
    }

    #[test]
    fn parse_round_trips_labels() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse(mood.label()), Some(mood));
        }
        assert_eq!(Mood::parse("grumpy"), None);
    }

    #[test]
    fn unknown_categories_score_the_fallback() {
        assert_eq!(score_for("happy"), 10.0);
        assert_eq!(score_for("sad"), 0.0);
        assert_eq!(score_for("🦀"), 5.0);
        assert_eq!(score_for(""), 5.0);
    }

    #[test]
    fn inference_is_case_insensitive_containment() {
        assert_eq!(infer("What a GREAT day"), Mood::Happy);
        assert_eq!(infer("feeling pretty worried about tomorrow"), Mood::Anxious);
        assert_eq!(infer("so sleepy after lunch"), Mood::Tired);
    }

    #[test]
    fn first_matching_category_wins() {
        // "excited" is in the happy keyword list, which is probed first.
        assert_eq!(infer("excited"), Mood::Happy);
        // A sad keyword beats an anxious one because sad is probed earlier.
        assert_eq!(infer("down and stressed"), Mood::Sad);
    }

    #[test]
    fn no_keyword_defaults_to_neutral() {
        assert_eq!(infer(""), Mood::Neutral);
        assert_eq!(infer("the quick brown fox"), Mood::Neutral);
    }
}
