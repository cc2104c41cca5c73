pub mod db_pools;
