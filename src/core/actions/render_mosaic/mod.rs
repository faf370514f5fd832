pub mod render_mosaic_rayon;
