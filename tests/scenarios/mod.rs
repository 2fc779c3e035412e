mod cold_reset;
mod ic_segment_miss;
mod load_use_interlock;
