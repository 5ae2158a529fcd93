mod id_allocator_tests;
