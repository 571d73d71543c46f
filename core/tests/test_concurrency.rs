#[cfg(test)]
mod tests {
    use packflate_core::{compress, decompress};

    fn payload(worker: usize) -> Vec<u8> {
        (0..(1000 + worker * 37))
            .map(|i| ((i * (worker + 1)) % 251) as u8)
            .collect()
    }

    #[test]
    fn concurrent_roundtrips_do_not_interfere() {
        let workers = 8;
        let results = crossbeam::scope(|s| {
            let handles: Vec<_> = (0..workers)
                .map(|w| {
                    s.spawn(move |_| {
                        let data = payload(w);
                        let mut last = None;
                        for _ in 0..50 {
                            let c = compress(&data).unwrap();
                            let inflated = decompress(&c, data.len()).unwrap();
                            assert_eq!(inflated.consumed, c.len());
                            last = Some(inflated.data);
                        }
                        (w, last.unwrap())
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(results.len(), workers);
        for (w, data) in results {
            assert_eq!(data, payload(w), "worker {} got corrupted output", w);
        }
    }
}
