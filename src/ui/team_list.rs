//! Team list and fetch status rendering

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::constants::ui::{COUNTRY_COLUMN_WIDTH, MISSING_FIELD, TEAM_NAME_COLUMN_WIDTH};
use crate::controller::{FetchStatus, TeamsController};
use crate::data_fetcher::models::Team;
use crate::error::AppError;

use super::RenderOptions;
use super::formatting::fit_to_width;

const HEADER_COLOR: Color = Color::Cyan;
const DETAIL_COLOR: Color = Color::Grey;
const ERROR_COLOR: Color = Color::Red;

/// Renders one line per team: name, country, stadium and founding year.
pub fn render_team_list<W: Write>(
    out: &mut W,
    teams: &[Team],
    options: &RenderOptions,
) -> Result<(), AppError> {
    if teams.is_empty() {
        queue!(out, Print("No teams found.\n"))?;
        return Ok(());
    }

    if options.color {
        queue!(
            out,
            SetForegroundColor(HEADER_COLOR),
            SetAttribute(Attribute::Bold)
        )?;
    }
    queue!(
        out,
        Print(format!(
            "{}{}{}\n",
            fit_to_width("Team", TEAM_NAME_COLUMN_WIDTH + 1),
            fit_to_width("Country", COUNTRY_COLUMN_WIDTH + 1),
            "Stadium • Founded"
        ))
    )?;
    if options.color {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }

    for team in teams {
        render_team_row(out, team, options)?;
    }

    out.flush()?;
    Ok(())
}

fn render_team_row<W: Write>(
    out: &mut W,
    team: &Team,
    options: &RenderOptions,
) -> Result<(), AppError> {
    let country = team.country.as_deref().unwrap_or(MISSING_FIELD);
    let stadium = team.stadium.as_deref().unwrap_or(MISSING_FIELD);
    let founded = team.formed_year.as_deref().unwrap_or(MISSING_FIELD);

    queue!(
        out,
        Print(fit_to_width(&team.name, TEAM_NAME_COLUMN_WIDTH)),
        Print(" ")
    )?;
    if options.color {
        queue!(out, SetForegroundColor(DETAIL_COLOR))?;
    }
    queue!(
        out,
        Print(fit_to_width(country, COUNTRY_COLUMN_WIDTH)),
        Print(format!(" {stadium} • {founded}"))
    )?;
    if options.color {
        queue!(out, ResetColor)?;
    }
    if options.show_badges
        && let Some(badge) = &team.badge_url
    {
        queue!(out, Print(format!("\n    {badge}")))?;
    }
    queue!(out, Print("\n"))?;
    Ok(())
}

/// Renders the status line for the controller's current selection.
pub fn render_status<W: Write>(
    out: &mut W,
    controller: &TeamsController,
    options: &RenderOptions,
) -> Result<(), AppError> {
    let league_label = controller
        .selected_league()
        .map(|id| match controller.find_league(id) {
            Some(league) => format!("{} ({})", league.name, league.id),
            None => id.to_string(),
        });

    match controller.status() {
        FetchStatus::Idle => {
            queue!(out, Print("Pick a league to load teams.\n"))?;
        }
        FetchStatus::Loading => {
            queue!(
                out,
                Print(format!(
                    "Loading teams for {}…\n",
                    league_label.unwrap_or_default()
                ))
            )?;
        }
        FetchStatus::Success => {
            let source = if controller.served_from_cache() {
                " (cached)"
            } else {
                ""
            };
            queue!(
                out,
                Print(format!(
                    "{}: {} teams{}\n",
                    league_label.unwrap_or_default(),
                    controller.teams().len(),
                    source
                ))
            )?;
        }
        FetchStatus::Error => {
            if options.color {
                queue!(out, SetForegroundColor(ERROR_COLOR))?;
            }
            queue!(
                out,
                Print("Couldn't load teams\n"),
                Print(format!("{}\n", controller.error_message()))
            )?;
            if options.color {
                queue!(out, ResetColor)?;
            }
            queue!(out, Print("Type 'refetch' to try again.\n"))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Renders the status line and, once loaded, the visible team list.
pub fn render_view<W: Write>(
    out: &mut W,
    controller: &TeamsController,
    options: &RenderOptions,
) -> Result<(), AppError> {
    render_status(out, controller, options)?;
    if controller.status() == FetchStatus::Success {
        render_team_list(out, &controller.visible_teams(), options)?;
    }
    Ok(())
}
