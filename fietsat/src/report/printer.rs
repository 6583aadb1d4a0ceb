use std::fmt::Display;
use std::io::Write;

use chrono::DateTime;
use chrono::TimeZone;

use super::Solution;
use crate::problem::Problem;

/// Writes the console report. `solution` is `None` when the instance is unsatisfiable.
pub fn write_report<Tz>(
    out: &mut impl Write,
    problem: &Problem,
    solution: Option<&Solution>,
    timestamp: &DateTime<Tz>,
) -> std::io::Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writeln!(
        out,
        "~~ FietSAT report @ {} ~~\n",
        timestamp.format("%H:%M, %b %d %Y")
    )?;
    writeln!(out, "Number of drivers: {}", problem.num_drivers())?;
    writeln!(out, "Number of routes: {}\n", problem.num_routes())?;

    let Some(solution) = solution else {
        writeln!(out, "SAT? No")?;
        return Ok(());
    };

    writeln!(out, "SAT? Yes\n")?;

    for (route_id, assignments) in solution.routes() {
        match problem.route(route_id) {
            Some(route) => writeln!(out, "Route {route_id} ({} – {}):", route.start, route.end)?,
            None => writeln!(out, "Route {route_id}:")?,
        }

        for assignment in assignments {
            let name = problem
                .driver(assignment.driver)
                .map(|driver| driver.name.as_str())
                .unwrap_or("unknown");
            writeln!(
                out,
                "\tDriver {} ({name}) @ exp. level {}",
                assignment.driver, assignment.level
            )?;
        }
    }

    Ok(())
}
