pub mod recommender_page;
