use maud::{Markup, html};

use crate::model::{Conditions, Recommendation, SwingAdvice, format_reading};

pub const INVALID_TARGET_MESSAGE: &str = "Please enter a valid target distance";
pub const SAVED_MESSAGE: &str = "Club distances saved successfully!";
/// Messages remove themselves after this long.
pub const MESSAGE_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[must_use]
pub fn swing_advice_text(advice: SwingAdvice) -> String {
    match advice {
        SwingAdvice::Harder(yards) => format!("💪 Swing {yards} yards harder than normal"),
        SwingAdvice::Softer(yards) => format!("🎯 Take {yards} yards off your swing"),
        SwingAdvice::Normal => "✅ Normal swing should be perfect".to_string(),
    }
}

/// `None` when conditions did not move the target.
#[must_use]
pub fn adjustment_text(rec: &Recommendation) -> Option<String> {
    if rec.adjustment_delta == 0 {
        return None;
    }
    let direction = if rec.adjustment_delta > 0 {
        "longer"
    } else {
        "shorter"
    };
    Some(format!(
        "📊 Adjusted for conditions: {} yards {direction}",
        rec.adjustment_delta.unsigned_abs()
    ))
}

#[must_use]
pub fn conditions_text(conditions: &Conditions) -> String {
    format!(
        "Wind: {}mph {} • Temp: {}°F",
        format_reading(conditions.wind_speed()),
        conditions.wind_direction(),
        format_reading(conditions.temperature())
    )
}

#[must_use]
pub fn render_recommendation(rec: &Recommendation, conditions: &Conditions) -> Markup {
    html! {
        div id="recommendation" class="recommendation-card" {
            h3 { "Recommended Club" }
            div class="recommended-club" {
                span class="club-emoji" { (rec.club.emoji()) }
                " "
                (rec.club.name())
            }
            div class="club-details" { (swing_advice_text(rec.swing_advice())) }
            @if let Some(note) = adjustment_text(rec) {
                div class="adjustment-note" {
                    (note)
                    br;
                    (conditions_text(conditions))
                }
            }
        }
    }
}

#[must_use]
pub fn render_message(text: &str, kind: MessageKind) -> Markup {
    let class = match kind {
        MessageKind::Success => "success-message",
        MessageKind::Error => "error-message",
    };
    let dismiss = format!("setTimeout(this.remove.bind(this), {MESSAGE_DISMISS_MS})");
    html! {
        div class=(class) hx-on-htmx-load=(dismiss) { (text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Club, CompassPoint};

    fn rec(delta: i64) -> Recommendation {
        Recommendation {
            club: Club::new("7iron", "7 Iron", "⚔️", 150).unwrap(),
            adjusted_target: 150 + delta,
            original_target: 150,
            absolute_difference: delta.unsigned_abs(),
            adjustment_delta: delta,
        }
    }

    #[test]
    fn no_note_without_adjustment() {
        assert_eq!(adjustment_text(&rec(0)), None);
    }

    #[test]
    fn note_says_longer_or_shorter() {
        assert_eq!(
            adjustment_text(&rec(3)).as_deref(),
            Some("📊 Adjusted for conditions: 3 yards longer")
        );
        assert_eq!(
            adjustment_text(&rec(-4)).as_deref(),
            Some("📊 Adjusted for conditions: 4 yards shorter")
        );
    }

    #[test]
    fn conditions_line_matches_display_format() {
        let c = Conditions::new(7.0, CompassPoint::W, 68.0).unwrap();
        assert_eq!(conditions_text(&c), "Wind: 7mph W • Temp: 68°F");
    }

    #[test]
    fn messages_dismiss_themselves() {
        let markup = render_message(SAVED_MESSAGE, MessageKind::Success).into_string();
        assert!(markup.contains(r#"class="success-message""#));
        assert!(markup.contains(r#"hx-on-htmx-load="setTimeout(this.remove.bind(this), 3000)""#));
    }

    #[test]
    fn card_contains_club_and_advice() {
        let markup = render_recommendation(&rec(0), &Conditions::FALLBACK).into_string();
        assert!(markup.contains("7 Iron"));
        assert!(markup.contains("Normal swing should be perfect"));
        assert!(!markup.contains("adjustment-note"));
    }
}
