pub mod jsonl_landmark_reader;
