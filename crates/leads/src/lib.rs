//! Lead generation and scoring module
//! Produces deterministic, scored sample leads for an industry/city pair

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Social media presence level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialPresence {
    Low,
    Medium,
    High,
}

impl SocialPresence {
    fn score_bonus(self) -> f64 {
        match self {
            SocialPresence::High => 10.0,
            SocialPresence::Medium => 5.0,
            SocialPresence::Low => 0.0,
        }
    }
}

impl std::fmt::Display for SocialPresence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocialPresence::Low => write!(f, "low"),
            SocialPresence::Medium => write!(f, "medium"),
            SocialPresence::High => write!(f, "high"),
        }
    }
}

/// Traffic-light band a score falls into, used for the badge color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreColor {
    Success,
    Warning,
    Danger,
}

impl ScoreColor {
    pub fn css_class(self) -> &'static str {
        match self {
            ScoreColor::Success => "score-success",
            ScoreColor::Warning => "score-warning",
            ScoreColor::Danger => "score-danger",
        }
    }
}

/// A scored lead with its ready-to-send outreach email
#[derive(Clone, Debug, PartialEq)]
pub struct Lead {
    pub name: String,
    pub domain: String,
    pub score: u32,
    pub score_color: ScoreColor,
    pub reasons: Vec<String>,
    pub email: String,
}

/// Band a 0-100 score into its badge color
pub fn color_for_score(score: u32) -> ScoreColor {
    if score >= 80 {
        ScoreColor::Success
    } else if score >= 60 {
        ScoreColor::Warning
    } else {
        ScoreColor::Danger
    }
}

/// Generate `n` deterministic leads for the given industry and city.
///
/// The same pair always yields the same leads; the RNG is seeded from the
/// pair so repeated searches are stable across runs. Results are sorted by
/// score, best first.
pub fn generate_leads(industry: &str, city: &str, n: usize) -> Vec<Lead> {
    let mut rng = StdRng::seed_from_u64(seed_for(industry, city));
    let industry_title = title_case(industry);
    let city_title = title_case(city);
    let domain_industry = compact_lowercase(industry);
    let domain_city = compact_lowercase(city);

    let mut leads = Vec::with_capacity(n);
    for i in 0..n {
        let name = format!("{} {} #{}", industry_title, city_title, i + 1);
        let domain = format!("www.{}{}-{}.de", domain_industry, i + 1, domain_city);
        let web_age: u32 = rng.gen_range(1..=12);
        let reviews: u32 = rng.gen_range(0..=250);
        let social = match rng.gen_range(0..3u8) {
            0 => SocialPresence::Low,
            1 => SocialPresence::Medium,
            _ => SocialPresence::High,
        };
        let speed: u32 = rng.gen_range(40..=100);

        let base = 40.0
            + ((web_age as f64) * 3.0).min(20.0)
            + ((reviews as f64) / 5.0).min(20.0)
            + social.score_bonus()
            + ((speed as f64) - 40.0) / 6.0;
        let score = base.clamp(10.0, 100.0) as u32;

        let reasons = vec![
            format!("Domain-Aktivität ~{web_age} Jahre"),
            format!("{reviews} Bewertungen gefunden"),
            format!("Soziale Präsenz: {social}"),
            format!("Performance-Index: {speed}/100"),
        ];

        let slot = PROPOSED_SLOTS[rng.gen_range(0..PROPOSED_SLOTS.len())];
        let email = outreach_email(&name, &city_title, slot);

        leads.push(Lead {
            name,
            domain,
            score,
            score_color: color_for_score(score),
            reasons,
            email,
        });
    }

    leads.sort_by(|a, b| b.score.cmp(&a.score));
    leads
}

const PROPOSED_SLOTS: [&str; 3] = ["morgen 10:00", "morgen 15:00", "übermorgen 11:30"];

fn outreach_email(name: &str, city: &str, slot: &str) -> String {
    let greeting_name = name.split_whitespace().next().unwrap_or(name);
    format!(
        "Betreff: Schneller Quick Win für {name}\n\
         \n\
         Hi {greeting_name},\n\
         \n\
         ich habe mir kurz eure Online-Präsenz angesehen und sehe 2–3 schnelle Ansatzpunkte,\n\
         mit denen ihr messbar mehr Anfragen aus {city} holen könnt (ohne mehr Ad-Spend).\n\
         Ich kann dir das in 10–15 Min zeigen – vollkommen unverbindlich.\n\
         \n\
         Wenn’s passt, baue ich euch einen kleinen Automations-Workflow als Test (kostenlos).\n\
         Wie klingt {slot}?\n\
         \n\
         Beste Grüße\n\
         William\n"
    )
}

fn seed_for(industry: &str, city: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    industry.hash(&mut hasher);
    city.hash(&mut hasher);
    hasher.finish()
}

/// Uppercase the first letter of each word, lowercase the rest
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn compact_lowercase(s: &str) -> String {
    s.to_lowercase().replace(' ', "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_pair_is_deterministic() {
        let a = generate_leads("Friseur", "Berlin", 8);
        let b = generate_leads("Friseur", "Berlin", 8);
        assert_eq!(a, b);
    }

    #[test]
    fn different_city_changes_output() {
        let a = generate_leads("Friseur", "Berlin", 8);
        let b = generate_leads("Friseur", "Hamburg", 8);
        assert_ne!(a, b);
    }

    #[test]
    fn respects_requested_count() {
        assert_eq!(generate_leads("Bäckerei", "Köln", 3).len(), 3);
        assert_eq!(generate_leads("Bäckerei", "Köln", 0).len(), 0);
    }

    #[test]
    fn leads_are_sorted_by_score_descending() {
        let leads = generate_leads("Zahnarzt", "München", 12);
        for pair in leads.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn scores_stay_in_bounds_with_matching_color() {
        for lead in generate_leads("Autohaus", "Dresden", 20) {
            assert!((10..=100).contains(&lead.score));
            assert_eq!(lead.score_color, color_for_score(lead.score));
        }
    }

    #[test]
    fn color_bands() {
        assert_eq!(color_for_score(80), ScoreColor::Success);
        assert_eq!(color_for_score(79), ScoreColor::Warning);
        assert_eq!(color_for_score(60), ScoreColor::Warning);
        assert_eq!(color_for_score(59), ScoreColor::Danger);
    }

    #[test]
    fn names_and_domains_follow_the_pair() {
        let leads = generate_leads("physio praxis", "bad homburg", 2);
        assert_eq!(leads.len(), 2);
        for lead in &leads {
            assert!(lead.name.starts_with("Physio Praxis Bad Homburg #"));
            assert!(lead.domain.starts_with("www.physiopraxis"));
            assert!(lead.domain.ends_with("-badhomburg.de"));
        }
    }

    #[test]
    fn email_carries_subject_and_a_known_slot() {
        let leads = generate_leads("Friseur", "Berlin", 4);
        for lead in &leads {
            assert!(lead
                .email
                .starts_with(&format!("Betreff: Schneller Quick Win für {}", lead.name)));
            assert!(PROPOSED_SLOTS.iter().any(|slot| lead.email.contains(slot)));
            assert!(lead.email.contains("Hi Friseur,"));
        }
    }

    #[test]
    fn every_lead_has_four_reasons() {
        for lead in generate_leads("Friseur", "Berlin", 5) {
            assert_eq!(lead.reasons.len(), 4);
            assert!(lead.reasons[0].starts_with("Domain-Aktivität"));
            assert!(lead.reasons[3].starts_with("Performance-Index"));
        }
    }
}
