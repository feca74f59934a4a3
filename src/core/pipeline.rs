use crate::core::assembler::{assemble, final_newline};
use crate::core::filter::{ContentFilter, FilterRules};
use crate::core::preamble::extract_preamble;
use crate::core::{loader, writer};
use crate::core::{
    AmalgamReport, AssembledOutput, ConfigProvider, FilteredBlock, Fragment, FragmentStats,
    Pipeline, Storage,
};
use crate::utils::error::{AmalgamError, Result};

pub struct AmalgamPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> AmalgamPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn rules(&self) -> FilterRules {
        FilterRules::new(
            self.config.header(),
            &self.config.guard_macro(),
            self.config.comment_prefix(),
        )
    }
}

fn find<'a>(fragments: &'a [Fragment], name: &str) -> Result<&'a Fragment> {
    fragments
        .iter()
        .find(|f| f.name == name)
        .ok_or_else(|| AmalgamError::ProcessingError {
            message: format!("fragment '{}' was not loaded", name),
        })
}

impl<S: Storage, C: ConfigProvider> Pipeline for AmalgamPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Fragment>> {
        loader::load_all(&self.storage, self.config.load_order())
    }

    fn transform(&self, fragments: Vec<Fragment>) -> Result<AssembledOutput> {
        let rules = self.rules();
        let header = find(&fragments, self.config.header())?;
        let (preamble, _) = extract_preamble(&header.lines, &rules);
        tracing::debug!("Preamble: {} lines from {}", preamble.lines.len(), header.name);

        let filter = ContentFilter::new(rules);
        let mut blocks = Vec::with_capacity(self.config.merge_order().len());
        let mut stats = Vec::with_capacity(blocks.capacity());

        for name in self.config.merge_order() {
            let fragment = find(&fragments, name)?;
            let lines = filter.filter(&fragment.lines);
            if lines.is_empty() {
                tracing::warn!("Fragment {} has no content after filtering", fragment.name);
            }
            tracing::debug!(
                "Filtered {}: {} -> {} lines",
                fragment.name,
                fragment.len(),
                lines.len()
            );

            stats.push(FragmentStats {
                name: fragment.name.clone(),
                lines_read: fragment.len(),
                lines_kept: lines.len(),
            });
            // only the source's own last line can lack a terminator
            let terminated = fragment.final_newline || lines.last() != fragment.lines.last();
            blocks.push(FilteredBlock {
                name: fragment.name.clone(),
                lines,
                final_newline: terminated,
            });
        }

        let lines = assemble(&preamble, &blocks);
        // with no block content the output is the preamble, which ends the
        // header only when the whole header is comments
        let final_newline = final_newline(&blocks).unwrap_or(
            header.final_newline || preamble.lines.len() < header.lines.len(),
        );
        let report = AmalgamReport {
            preamble_lines: preamble.lines.len(),
            fragments: stats,
            output_lines: lines.len(),
        };

        Ok(AssembledOutput {
            lines,
            final_newline,
            report,
        })
    }

    fn load(&self, output: AssembledOutput) -> Result<String> {
        let destination = self.config.destination();
        writer::write(&self.storage, &output, destination)?;
        Ok(self.storage.resolve(destination).display().to_string())
    }
}
