//! A small number guessing game, played entirely in the browser.

use super::{RenderContext, View};

/// Upper bound of the secret number.
pub const MAX_NUMBER: u32 = 100;

#[derive(Debug)]
pub struct Game;

pub static GAME: Game = Game;

impl View for Game {
    fn id(&self) -> &'static str {
        "game"
    }

    fn title(&self) -> &'static str {
        "Game"
    }

    fn render_body(&self, _ctx: &RenderContext) -> String {
        format!(
            r#"<h1>Guess the number</h1>
<p>I'm thinking of a number between 1 and {max}.</p>
<form id="guess-form">
<input id="guess" type="number" min="1" max="{max}" required>
<button type="submit">Guess</button>
</form>
<p id="feedback" aria-live="polite"></p>
<script>
let secret = Math.floor(Math.random() * {max}) + 1;
let tries = 0;
document.getElementById('guess-form').addEventListener('submit', e => {{
  e.preventDefault();
  const guess = Number(document.getElementById('guess').value);
  const out = document.getElementById('feedback');
  tries += 1;
  if (guess === secret) {{
    out.textContent = `Got it in ${{tries}} tries! New number chosen.`;
    secret = Math.floor(Math.random() * {max}) + 1;
    tries = 0;
  }} else {{
    out.textContent = guess < secret ? 'Higher.' : 'Lower.';
  }}
}});
</script>"#,
            max = MAX_NUMBER
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_carries_bounds() {
        let body = GAME.render_body(&RenderContext::default());
        assert!(body.contains("between 1 and 100"));
        assert!(body.contains("max=\"100\""));
    }
}
