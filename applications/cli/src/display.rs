//! Plain-text rendering of deck events

use flashdeck_core::{DeckEvent, Side};

/// Shown instead of a card when the deck is empty
pub const NO_DATA: &str = "No data loaded";

/// Text line for an event
pub fn render(event: &DeckEvent) -> String {
    match event {
        DeckEvent::CardChanged { card, .. } => format!("[front] {}", card.front_text),
        DeckEvent::SideChanged { card, text } => {
            let label = match card.visible_side {
                Side::Front => "front",
                Side::Back => "back",
            };
            format!("[{}] {}", label, text)
        }
        DeckEvent::CounterUpdated { position, total } => format!("({}/{})", position, total),
        DeckEvent::AutoplayControls {
            flip_control_enabled,
            walk_control_enabled,
        } => {
            // Locked controls are the ones the other toggle disabled
            let locked: Vec<&str> = [
                (!flip_control_enabled, "auto-flip"),
                (!walk_control_enabled, "auto-walk"),
            ]
            .into_iter()
            .filter_map(|(locked, name)| locked.then_some(name))
            .collect();

            if locked.is_empty() {
                "autoplay off".to_string()
            } else {
                format!("autoplay on ({} locked)", locked.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_core::Flashcard;

    #[test]
    fn renders_sides() {
        let mut card = Flashcard::new(2, "dog", "perro", "");
        assert_eq!(
            render(&DeckEvent::CardChanged {
                card: card.clone(),
                position: 2,
                total: 5
            }),
            "[front] dog"
        );

        card.flip();
        assert_eq!(
            render(&DeckEvent::SideChanged {
                card,
                text: "perro".to_string()
            }),
            "[back] perro"
        );
    }

    #[test]
    fn renders_counter() {
        assert_eq!(
            render(&DeckEvent::CounterUpdated {
                position: 3,
                total: 20
            }),
            "(3/20)"
        );
    }

    #[test]
    fn renders_control_state() {
        assert_eq!(
            render(&DeckEvent::autoplay_controls(false, false)),
            "autoplay off"
        );
        assert_eq!(
            render(&DeckEvent::autoplay_controls(true, false)),
            "autoplay on (auto-walk locked)"
        );
    }
}
