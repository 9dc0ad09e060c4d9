pub mod astral;
pub mod beads;
pub mod ccfeast;
pub mod cowcheckup;
pub mod farmj;
pub mod friday;
pub mod gift1;
pub mod mex;
pub mod milk;
pub mod mooin2;
pub mod ride;
pub mod skidesign;
pub mod spiral;
pub mod transform;
