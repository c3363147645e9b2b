pub mod ablls_r;
pub mod afls;
pub mod vb_mapp;
pub mod vineland3;
