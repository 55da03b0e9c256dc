//! Builds a small portal frame with a braced bay and prints its joints.
//!
//! Run with `RUST_LOG=joinery=debug cargo run --example frame` to see the
//! node search as it happens.

use joinery::assembly::{Load, Support};
use joinery::catalog::{MaterialProperty, RectangularSection};
use joinery::geometry::Segment;
use joinery::math::Point3;
use joinery::model::SectionAssignment;
use joinery::{Assembly, Element, ElementStore, StructuralAssembly};
use tracing_subscriber::EnvFilter;

fn main() -> joinery::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let column_section = SectionAssignment::new(
        RectangularSection::new("GL 200x200", 200.0, 200.0)?.into(),
        MaterialProperty::default(),
    );
    let beam_section = SectionAssignment::new(
        RectangularSection::new("GL 115x360", 360.0, 115.0)?.into(),
        MaterialProperty::default(),
    );

    let p = Point3::new;
    let mut store = ElementStore::new();
    let members = [
        Element::new(Segment::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 3.0))?)
            .with_tag("column")
            .with_assignment(column_section.clone()),
        Element::new(Segment::new(p(6.0, 0.0, 0.0), p(6.0, 0.0, 3.0))?)
            .with_tag("column")
            .with_assignment(column_section),
        Element::new(Segment::new(p(0.0, 0.0, 3.0), p(6.0, 0.0, 3.0))?)
            .with_tag("beam")
            .with_assignment(beam_section),
        Element::new(Segment::new(p(0.0, 0.0, 0.0), p(6.0, 0.0, 3.0))?).with_tag("brace"),
        Element::new(Segment::new(p(6.0, 0.0, 0.0), p(0.0, 0.0, 3.0))?).with_tag("brace"),
        Element::new(Segment::new(p(3.0, 0.0, 3.0), p(3.0, 0.0, 5.0))?)
            .with_tag("post")
            .with_intersection(false),
    ];

    let mut assembly = Assembly::new();
    for element in members {
        let id = store.add_element(element);
        assembly.add_element(&store, id)?;
    }
    println!("{assembly}");

    for detail in assembly.generate_details() {
        let tags: Vec<&str> = detail
            .elements
            .iter()
            .map(|&id| store.element(id).map(|e| e.tag.as_str()))
            .collect::<Result<_, _>>()?;
        println!(
            "{} at ({:.2}, {:.2}, {:.2}): {}",
            detail.node,
            detail.point.x,
            detail.point.y,
            detail.point.z,
            tags.join(", ")
        );
    }

    for &id in assembly.elements() {
        let params = assembly.node_parameters_on(&store, id)?;
        println!("{:?}: split at {params:?}", store.element(id)?.tag);
    }

    let mut structure = StructuralAssembly::new(assembly);
    structure.add_support(Support::pinned("base", p(0.0, 0.0, 0.0)));
    structure.add_support(Support::pinned("base", p(6.0, 0.0, 0.0)));
    structure.add_load(Load::gravity("self-weight", 0));
    println!("{structure}");

    Ok(())
}
