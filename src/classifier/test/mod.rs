mod heuristic_test;
