//! The harmony catalog: the fixed table of named rule sets that derive companion colors from a
//! base color.
//!
//! A harmony is an ordered list of [`HarmonyRule`]s. Each rule turns the base color into one
//! companion by rotating its hue and scaling its saturation and value. The order of the rules is
//! significant: it is the order the derived colors are displayed and exported in.
//!
//! The table is built once, on first access, and never changes afterwards, so references into it
//! are `'static` and can be shared freely between threads.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::HarmonyError;

/// One offset applied to a base color to produce a companion color.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyRule {
    /// Degrees added to the base hue. Signed, and may exceed a full turn.
    pub hue_offset: f64,
    /// Multiplier applied to the base saturation.
    pub saturation_scale: f64,
    /// Multiplier applied to the base value.
    pub value_scale: f64,
}

impl HarmonyRule {
    /// A rule that changes all three components.
    pub fn new(hue_offset: f64, saturation_scale: f64, value_scale: f64) -> HarmonyRule {
        HarmonyRule {
            hue_offset,
            saturation_scale,
            value_scale,
        }
    }

    /// A rule that only rotates the hue.
    pub fn hue(hue_offset: f64) -> HarmonyRule {
        HarmonyRule::new(hue_offset, 1., 1.)
    }

    /// A rule that keeps the hue and only scales saturation and value.
    pub fn tone(saturation_scale: f64, value_scale: f64) -> HarmonyRule {
        HarmonyRule::new(0., saturation_scale, value_scale)
    }
}

/// The identity rule: applying it returns the base color unchanged.
impl Default for HarmonyRule {
    fn default() -> HarmonyRule {
        HarmonyRule::new(0., 1., 1.)
    }
}

/// A named, ordered set of rules. Two harmonies are the same harmony if they have the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harmony {
    name: String,
    rules: Vec<HarmonyRule>,
    description: String,
}

impl Harmony {
    /// Creates a harmony. The catalog is built this way; callers can build ad-hoc harmonies to
    /// derive and store color sets with.
    pub fn new<S: Into<String>, D: Into<String>>(
        name: S,
        rules: Vec<HarmonyRule>,
        description: D,
    ) -> Harmony {
        Harmony {
            name: name.into(),
            rules,
            description: description.into(),
        }
    }

    /// The name, which is also the identity of the harmony.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules, in display order.
    pub fn rules(&self) -> &[HarmonyRule] {
        &self.rules
    }

    /// A human-readable explanation of the harmony, meant for tooltips.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The number of rules (one less than the number of colors the harmony derives).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if the harmony has no rules and only ever yields the base color.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl PartialEq for Harmony {
    fn eq(&self, other: &Harmony) -> bool {
        self.name == other.name
    }
}

impl Eq for Harmony {}

fn build_catalog() -> Vec<Harmony> {
    use self::HarmonyRule as R;

    let catalog = vec![
        Harmony::new(
            "analogous",
            vec![R::hue(15.), R::hue(-15.), R::hue(-30.), R::hue(30.)],
            "Analogous harmony: two or more colors side by side on the color wheel, \
             also called adjoining colors.",
        ),
        Harmony::new(
            "complementary",
            vec![R::hue(180.)],
            "Complementary harmony: the two colors directly across the color wheel from one \
             another. Each color has exactly one direct complement.",
        ),
        Harmony::new(
            "diad",
            vec![
                R::tone(0.8, 0.8),
                R::tone(0.5, 0.5),
                R::new(25., 0.5, 0.9),
                R::new(25., 0.5, 0.5),
                R::hue(25.),
            ],
            "Diad harmony: two colors separated by one color on the color wheel, often used as \
             accents next to neutrals.",
        ),
        Harmony::new(
            "split-complementary",
            vec![R::hue(150.), R::hue(210.)],
            "Split complementary harmony: one color paired with the two colors on either side \
             of its direct complement.",
        ),
        Harmony::new(
            "double-split-complementary",
            vec![R::hue(-25.), R::hue(25.), R::hue(155.), R::hue(205.)],
            "Double complement: two sets of complementary colors.",
        ),
        Harmony::new(
            "monochromatic",
            vec![
                R::tone(0.8, 1.),
                R::tone(0.3, 0.65),
                R::tone(0.5, 1.),
                R::tone(0.8, 0.8),
            ],
            "Monochromatic harmony: tints, tones and shades of a single color family.",
        ),
        Harmony::new(
            "triad",
            vec![R::hue(120.), R::hue(240.)],
            "Triad: three hues equally spaced around the color wheel.",
        ),
        Harmony::new(
            "shades",
            vec![
                R::tone(0.8, 1.),
                R::tone(1., 0.25),
                R::tone(1., 0.5),
                R::tone(0.5, 0.7),
            ],
            "Shades: the same hue at decreasing values.",
        ),
        Harmony::new(
            "squares",
            vec![R::hue(90.), R::hue(180.), R::hue(270.)],
            "Tetrad: two complementary pairs with no two colors adjacent on the wheel.",
        ),
    ];
    debug!("built harmony catalog with {} harmonies", catalog.len());
    catalog
}

lazy_static! {
    static ref HARMONIES: Vec<Harmony> = build_catalog();
}

/// Every harmony in the catalog, in display order.
/// # Example
/// ```
/// # use color_harmony::harmony::list_harmonies;
/// let names: Vec<&str> = list_harmonies().iter().map(|h| h.name()).collect();
/// assert_eq!(names[0], "analogous");
/// assert_eq!(names.len(), 9);
/// ```
pub fn list_harmonies() -> &'static [Harmony] {
    &HARMONIES
}

/// Looks a harmony up by its exact (case-sensitive) name.
///
/// # Errors
/// Returns `HarmonyError::NotFound` if there is no harmony with that name.
pub fn find_harmony(name: &str) -> Result<&'static Harmony, HarmonyError> {
    HARMONIES
        .iter()
        .find(|h| h.name == name)
        .ok_or_else(|| HarmonyError::NotFound(name.to_string()))
}

/// Picks a random harmony from the catalog that is not `current`, so that a randomize action always
/// visibly changes the selection.
pub fn random_harmony<R: Rng + ?Sized>(current: Option<&Harmony>, rng: &mut R) -> &'static Harmony {
    let candidates: Vec<&'static Harmony> = HARMONIES
        .iter()
        .filter(|h| current.map_or(true, |c| c != *h))
        .collect();
    match candidates.choose(rng) {
        Some(h) => *h,
        // only reachable with a single-entry catalog
        None => &HARMONIES[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_display_order() {
        let names: Vec<&str> = list_harmonies().iter().map(|h| h.name()).collect();
        assert_eq!(
            names,
            vec![
                "analogous",
                "complementary",
                "diad",
                "split-complementary",
                "double-split-complementary",
                "monochromatic",
                "triad",
                "shades",
                "squares",
            ]
        );
    }

    #[test]
    fn test_complementary() {
        let comp = find_harmony("complementary").unwrap();
        assert_eq!(comp.len(), 1);
        assert_eq!(comp.rules()[0].hue_offset, 180.);
        assert_eq!(comp.rules()[0].saturation_scale, 1.);
    }

    #[test]
    fn test_rule_tables() {
        let triad = find_harmony("triad").unwrap();
        let offsets: Vec<f64> = triad.rules().iter().map(|r| r.hue_offset).collect();
        assert_eq!(offsets, vec![120., 240.]);

        let shades = find_harmony("shades").unwrap();
        assert_eq!(shades.rules()[1], HarmonyRule::tone(1., 0.25));

        let diad = find_harmony("diad").unwrap();
        assert_eq!(diad.rules()[2], HarmonyRule::new(25., 0.5, 0.9));
        assert_eq!(diad.len(), 5);

        for harmony in list_harmonies() {
            assert!(!harmony.is_empty());
            assert!(!harmony.description().is_empty());
            for rule in harmony.rules() {
                assert!(rule.saturation_scale >= 0. && rule.value_scale >= 0.);
            }
        }
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            find_harmony("Triad"),
            Err(HarmonyError::NotFound("Triad".to_string()))
        );
        assert!(find_harmony("").is_err());
    }

    #[test]
    fn test_random_harmony_changes_selection() {
        let mut rng = StdRng::seed_from_u64(7);
        let current = find_harmony("triad").unwrap();
        for _ in 0..50 {
            assert_ne!(random_harmony(Some(current), &mut rng).name(), "triad");
        }
        // with nothing selected, every harmony is a candidate
        let picked = random_harmony(None, &mut rng);
        assert!(find_harmony(picked.name()).is_ok());
    }

    #[test]
    fn test_identity_rule() {
        assert_eq!(HarmonyRule::default(), HarmonyRule::hue(0.));
    }
}
