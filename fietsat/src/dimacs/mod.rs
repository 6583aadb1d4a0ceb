//! Writes a [`Formulation`] in the DIMACS CNF format, so the instance can be handed to any
//! other SAT solver.
//!
//! The comment block before the header lists every named variable together with the driver,
//! route and level it stands for, followed by the number of clauses of each constraint family.
//! Clauses are written in the order of [`Formulation::clauses`].
use std::io::Write;

use crate::formulation::Formulation;

pub fn write_dimacs(out: &mut impl Write, formulation: &Formulation) -> std::io::Result<()> {
    for (variable, key) in formulation.pool().named_variables() {
        writeln!(
            out,
            "c {} driver {} route {} level {}",
            variable.index(),
            key.driver,
            key.route,
            key.level
        )?;
    }
    for group in formulation.groups() {
        writeln!(out, "c {}: {} clauses", group.family(), group.num_clauses())?;
    }

    writeln!(
        out,
        "p cnf {} {}",
        formulation.pool().num_variables(),
        formulation.num_clauses()
    )?;

    for clause in formulation.clauses() {
        for literal in clause {
            write!(out, "{} ", literal.to_dimacs())?;
        }
        writeln!(out, "0")?;
    }

    Ok(())
}
