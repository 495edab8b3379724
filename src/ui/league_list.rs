use std::io::Write;

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::data_fetcher::models::League;
use crate::error::AppError;

use super::RenderOptions;
use super::formatting::fit_to_width;

const ID_COLUMN_WIDTH: usize = 8;

/// Renders the league catalog as `id  name (alternate names)` lines.
pub fn render_league_list<W: Write>(
    out: &mut W,
    leagues: &[League],
    options: &RenderOptions,
) -> Result<(), AppError> {
    if leagues.is_empty() {
        queue!(out, Print("No leagues available.\n"))?;
        out.flush()?;
        return Ok(());
    }

    for league in leagues {
        if options.color {
            queue!(out, SetForegroundColor(Color::Yellow))?;
        }
        queue!(out, Print(fit_to_width(&league.id, ID_COLUMN_WIDTH)))?;
        if options.color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print(&league.name))?;
        if let Some(alternate) = league.alternate_name.as_deref().filter(|a| !a.is_empty()) {
            queue!(out, Print(format!(" ({alternate})")))?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_render_leagues() {
        let mut premier = TestDataBuilder::create_league("4328", "English Premier League");
        premier.alternate_name = Some("Premier League, EPL".to_string());
        let leagues = vec![premier, TestDataBuilder::create_league("4335", "Spanish La Liga")];

        let mut buffer = Vec::new();
        render_league_list(&mut buffer, &leagues, &RenderOptions::plain()).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "4328    English Premier League (Premier League, EPL)\n4335    Spanish La Liga\n"
        );
    }

    #[test]
    fn test_empty_catalog() {
        let mut buffer = Vec::new();
        render_league_list(&mut buffer, &[], &RenderOptions::plain()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "No leagues available.\n");
    }
}
