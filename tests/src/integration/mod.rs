//! # Integration Scenarios

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod sequencing_flows;
#[cfg(test)]
mod storage_safety;
