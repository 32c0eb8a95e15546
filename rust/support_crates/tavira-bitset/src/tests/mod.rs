mod bit_vector_tests;
