//! Parallel Grid Scan

use super::*;
use crate::error::*;

impl<'a> GridScan<'a> {
    /// Runs the scan with rows distributed over `n_threads` worker threads.
    /// The resulting field is identical to the one `run()` produces.
    ///
    /// * `n_threads` - Number of worker threads; 0 or 1 runs serially.
    /// * `cancel`    - Polled once per row by each worker.
    /// * `progress`  - Called on the calling thread with (rows done, total
    ///                 rows) as rows complete.
    pub fn run_parallel<P>(
        self,
        n_threads: usize,
        cancel: &CancelToken,
        mut progress: P,
    ) -> Result<IlluminanceField>
    where
        P: FnMut(usize, usize),
    {
        if n_threads <= 1 {
            return self.run(cancel, progress);
        }

        let n_rows = self.row_count();
        info!(
            "Sampling {}x{} grid ({} points) for {} fixtures on {} threads",
            self.xs.len(),
            self.ys.len(),
            self.point_count(),
            self.fixtures.len(),
            n_threads
        );

        let scan = &self;
        let mut rows: Vec<Option<Vec<SamplePoint>>> = vec![None; n_rows];

        crossbeam::scope(|scope| {
            let (work_tx, work_rx) = crossbeam_channel::bounded(n_threads);
            let (done_tx, done_rx) = crossbeam_channel::unbounded();

            // Spawn worker threads.
            for _ in 0..n_threads {
                let rxc = work_rx.clone();
                let txc = done_tx.clone();
                scope.spawn(move |_| {
                    for row in rxc.iter() {
                        if cancel.is_cancelled() {
                            break;
                        }
                        if txc.send((row, scan.sample_row(row))).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(work_rx); // Drop extra rx since we've cloned one for each worker.
            drop(done_tx);

            // Send work.
            scope.spawn(move |_| {
                for row in 0..n_rows {
                    if cancel.is_cancelled() || work_tx.send(row).is_err() {
                        break;
                    }
                }
            });

            // Collect rows in completion order; they are placed by index.
            let mut done = 0;
            for (row, samples) in done_rx.iter() {
                rows[row] = Some(samples);
                done += 1;
                debug!("Sampled row {row} ({done}/{n_rows})");
                progress(done, n_rows);
            }
        })
        .map_err(|_| CalcError::WorkerFailed)?;

        if cancel.is_cancelled() {
            warn!("Parallel grid scan cancelled");
            return Err(CalcError::Cancelled);
        }

        let rows: Option<Vec<Vec<SamplePoint>>> = rows.into_iter().collect();
        let points = rows.ok_or(CalcError::Cancelled)?.concat();
        Ok(IlluminanceField::new(points, self.area))
    }
}
