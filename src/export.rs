use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_writer::ArrowWriter;
use std::fs::File;
use std::sync::Arc;

use crate::graph::Graph;
use crate::tour::Tour;

pub fn serialize_to_parquet(
    tour: &Tour,
    graph: &Graph,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut cumulative = 0.0;
    let mut steps = Vec::with_capacity(tour.leg_count());
    let mut froms = Vec::with_capacity(tour.leg_count());
    let mut tos = Vec::with_capacity(tour.leg_count());
    let mut weights = Vec::with_capacity(tour.leg_count());
    let mut cumulative_costs = Vec::with_capacity(tour.leg_count());

    for (step, hop) in tour.vertices.windows(2).enumerate() {
        // The tour records vertices, not edge ids; a hop over parallel
        // edges of unequal weight is reported at the cheapest one.
        let weight = graph
            .min_weight_between(hop[0], hop[1])
            .unwrap_or(f64::NAN);
        cumulative += weight;
        steps.push(step as i64);
        froms.push(graph.label(hop[0]).to_string());
        tos.push(graph.label(hop[1]).to_string());
        weights.push(weight);
        cumulative_costs.push(cumulative);
    }

    let steps: Int64Array = steps.into_iter().map(Some).collect();
    let froms: StringArray = froms.iter().map(|s| Some(s.as_str())).collect();
    let tos: StringArray = tos.iter().map(|s| Some(s.as_str())).collect();
    let weights: Float64Array = weights.into_iter().map(Some).collect();
    let cumulative_costs: Float64Array = cumulative_costs.into_iter().map(Some).collect();

    // Arrow schema
    let schema = Schema::new(vec![
        Field::new("step", DataType::Int64, false),
        Field::new("from", DataType::Utf8, false),
        Field::new("to", DataType::Utf8, false),
        Field::new("leg_weight", DataType::Float64, false),
        Field::new("cumulative_cost", DataType::Float64, false),
    ]);

    let batch = RecordBatch::try_new(
        Arc::new(schema),
        vec![
            Arc::new(steps),
            Arc::new(froms),
            Arc::new(tos),
            Arc::new(weights),
            Arc::new(cumulative_costs),
        ],
    )?;

    let file = File::create(filename)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}
